use actix_web::{web, HttpResponse};
use validator::Validate;

use mp_core::errors::DomainError;
use mp_core::repositories::{AccessLogRepository, PatientDirectory, RecordStore};
use mp_core::services::DocumentCategorizer;
use mp_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::UploadRecordRequest;
use crate::handlers::ApiError;

/// Handler for POST /api/v1/records/{user_id}
///
/// # Request Body
///
/// ```json
/// {
///     "type": "Lab Report",
///     "date": "2024-05-15",
///     "doctor_name": "Dr. Anya Sharma",
///     "hospital_name": "City General Hospital",
///     "notes": "Routine blood panel",
///     "uploaded_by": "hospital",
///     "accessor_id": "staff-42"
/// }
/// ```
///
/// ## Success (201 Created)
/// The stored record, including its assigned `id`.
///
/// ## Errors
/// - 400 `VALIDATION_ERROR` - Unknown type, blank doctor or hospital name
/// - 404 `NOT_FOUND` - No such patient
pub async fn upload<P, S, L, C>(
    state: web::Data<AppState<P, S, L, C>>,
    path: web::Path<String>,
    request: web::Json<UploadRecordRequest>,
) -> Result<HttpResponse, ApiError>
where
    P: PatientDirectory + 'static,
    S: RecordStore + 'static,
    L: AccessLogRepository + 'static,
    C: DocumentCategorizer + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let user_id = path.into_inner();
    let (record, accessor) = request
        .into_new_record(&user_id)
        .map_err(DomainError::from)?;

    let stored = state.records.upload(record, &accessor).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(stored)))
}
