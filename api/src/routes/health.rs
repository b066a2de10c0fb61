use actix_web::HttpResponse;
use mp_shared::HealthResponse;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "medportal-api";

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}
