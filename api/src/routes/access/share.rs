use actix_web::{web, HttpResponse};
use validator::Validate;

use mp_core::repositories::{AccessLogRepository, PatientDirectory, RecordStore};
use mp_core::services::DocumentCategorizer;
use mp_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::ShareAccessRequest;
use crate::handlers::ApiError;

/// Handler for POST /api/v1/access/share
///
/// Issues a fresh one-time code for the patient. Any code issued earlier
/// for the same patient stops working.
///
/// # Request Body
///
/// ```json
/// { "username": "patient123" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": {
///         "username": "patient123",
///         "code": "209774",
///         "expires_at": "2024-05-15T10:05:00Z",
///         "expires_in_seconds": 300,
///         "qr_payload": "patient123"
///     },
///     "timestamp": "2024-05-15T10:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 `VALIDATION_ERROR` - Username missing or too long
/// - 404 `NOT_FOUND` - No such patient
pub async fn share<P, S, L, C>(
    state: web::Data<AppState<P, S, L, C>>,
    request: web::Json<ShareAccessRequest>,
) -> Result<HttpResponse, ApiError>
where
    P: PatientDirectory + 'static,
    S: RecordStore + 'static,
    L: AccessLogRepository + 'static,
    C: DocumentCategorizer + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let grant = state.sharing.share_access(&request.username).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(grant)))
}
