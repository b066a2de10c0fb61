use actix_web::{web, HttpResponse};
use validator::Validate;

use mp_core::repositories::{AccessLogRepository, PatientDirectory, RecordStore};
use mp_core::services::DocumentCategorizer;
use mp_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::AccessLogQuery;
use crate::handlers::ApiError;

/// Handler for GET /api/v1/records/{user_id}/access-log
///
/// Most recent entries first; `limit` defaults to 20 and may not exceed 100.
pub async fn access_log<P, S, L, C>(
    state: web::Data<AppState<P, S, L, C>>,
    path: web::Path<String>,
    query: web::Query<AccessLogQuery>,
) -> Result<HttpResponse, ApiError>
where
    P: PatientDirectory + 'static,
    S: RecordStore + 'static,
    L: AccessLogRepository + 'static,
    C: DocumentCategorizer + 'static,
{
    query.validate()?;
    let user_id = path.into_inner();

    let entries = state.records.access_log(&user_id, query.limit()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(entries)))
}
