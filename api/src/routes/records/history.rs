use actix_web::{web, HttpResponse};
use validator::Validate;

use mp_core::repositories::{AccessLogRepository, PatientDirectory, RecordStore};
use mp_core::services::DocumentCategorizer;
use mp_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::AccessorQuery;
use crate::handlers::ApiError;

/// Handler for GET /api/v1/records/{user_id}
///
/// Returns the patient's records newest first and logs the read.
///
/// # Query
/// - `accessor_id` - Who is reading (defaults per `accessor_type`)
/// - `accessor_type` - `hospital_staff` (default), `patient` or `system`
pub async fn history<P, S, L, C>(
    state: web::Data<AppState<P, S, L, C>>,
    path: web::Path<String>,
    query: web::Query<AccessorQuery>,
) -> Result<HttpResponse, ApiError>
where
    P: PatientDirectory + 'static,
    S: RecordStore + 'static,
    L: AccessLogRepository + 'static,
    C: DocumentCategorizer + 'static,
{
    query.validate()?;
    let user_id = path.into_inner();
    let accessor = query.accessor(&user_id);

    let records = state.records.history(&user_id, &accessor).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(records)))
}
