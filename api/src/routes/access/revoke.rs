use actix_web::{web, HttpResponse};
use validator::Validate;

use mp_core::repositories::{AccessLogRepository, PatientDirectory, RecordStore};
use mp_core::services::DocumentCategorizer;
use mp_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{RevokeAccessRequest, RevokeAccessResponse};
use crate::handlers::ApiError;

/// Handler for POST /api/v1/access/revoke
///
/// Withdraws the patient's pending code. `revoked` is false when no code
/// was pending.
pub async fn revoke<P, S, L, C>(
    state: web::Data<AppState<P, S, L, C>>,
    request: web::Json<RevokeAccessRequest>,
) -> Result<HttpResponse, ApiError>
where
    P: PatientDirectory + 'static,
    S: RecordStore + 'static,
    L: AccessLogRepository + 'static,
    C: DocumentCategorizer + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let revoked = state.sharing.revoke_access(&request.username).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(RevokeAccessResponse { revoked })))
}
