//! CORS middleware configuration for cross-origin requests.
//!
//! The patient portal and the hospital staff dashboard are served from
//! separate origins. Development allows any origin; production only the
//! origins listed in `ALLOWED_ORIGINS`.
//!
//! # Environment Variables
//! - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
//! - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)

use actix_cors::Cors;
use actix_web::http::{header, Method};
use mp_shared::Environment;
use std::env;

const DEFAULT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance configured for `environment`.
pub fn create_cors(environment: Environment) -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_AGE);

    if environment.is_production() {
        let origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();
        create_production_cors(max_age, &origins)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize, allowed_origins: &str) -> Cors {
    tracing::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age);

    for origin in allowed_origins.split(',').map(str::trim) {
        if !origin.is_empty() {
            tracing::info!(origin, "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
