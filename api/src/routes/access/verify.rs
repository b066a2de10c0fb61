use actix_web::{web, HttpResponse};
use validator::Validate;

use mp_core::repositories::{AccessLogRepository, PatientDirectory, RecordStore};
use mp_core::services::DocumentCategorizer;
use mp_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::VerifyAccessRequest;
use crate::handlers::ApiError;

/// Handler for POST /api/v1/access/verify
///
/// Redeems a code presented by hospital staff. A code is accepted once.
///
/// # Request Body
///
/// ```json
/// { "username": "patient123", "code": "209774", "accessor_id": "staff-42" }
/// ```
///
/// ## Success (200 OK)
/// The patient's profile wrapped in `ApiResponse`.
///
/// ## Errors
/// - 400 `VALIDATION_ERROR` - Malformed request
/// - 401 `ACCESS_CODE_INVALID` - Wrong, expired, used or never issued code,
///   or unknown patient
pub async fn verify<P, S, L, C>(
    state: web::Data<AppState<P, S, L, C>>,
    request: web::Json<VerifyAccessRequest>,
) -> Result<HttpResponse, ApiError>
where
    P: PatientDirectory + 'static,
    S: RecordStore + 'static,
    L: AccessLogRepository + 'static,
    C: DocumentCategorizer + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let patient = state
        .sharing
        .redeem_access(&request.username, &request.code, &request.accessor_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(patient)))
}
