use actix_web::{web, HttpResponse};

use mp_core::errors::DomainError;
use mp_core::repositories::{AccessLogRepository, PatientDirectory, RecordStore};
use mp_core::services::DocumentCategorizer;
use mp_shared::ApiResponse;

use crate::app::AppState;
use crate::handlers::ApiError;

/// Handler for GET /api/v1/patients/{username}
pub async fn get_patient<P, S, L, C>(
    state: web::Data<AppState<P, S, L, C>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    P: PatientDirectory + 'static,
    S: RecordStore + 'static,
    L: AccessLogRepository + 'static,
    C: DocumentCategorizer + 'static,
{
    let username = path.into_inner();
    let patient = state
        .patients
        .find_by_username(&username)
        .await?
        .ok_or_else(|| DomainError::NotFound {
            resource: format!("patient '{}'", username.trim()),
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(patient)))
}
