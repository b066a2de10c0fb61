//! Application state and route wiring

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use mp_core::repositories::{AccessLogRepository, PatientDirectory, RecordStore};
use mp_core::services::{AccessSharingService, DocumentCategorizer, OtpAccessBroker, RecordService};
use mp_infra::{
    InMemoryAccessLogRepository, InMemoryPatientDirectory, InMemoryRecordStore, InMemoryStores,
    KeywordCategorizer,
};
use mp_shared::{error_codes, ErrorResponse};

use crate::handlers::ApiError;
use crate::routes::{access, documents, health, patients, records};

/// Application state that holds shared services
pub struct AppState<P, S, L, C>
where
    P: PatientDirectory,
    S: RecordStore,
    L: AccessLogRepository,
    C: DocumentCategorizer,
{
    pub sharing: Arc<AccessSharingService<P, L>>,
    pub records: Arc<RecordService<P, S, L>>,
    pub patients: Arc<P>,
    pub categorizer: Arc<C>,
}

impl<P, S, L, C> AppState<P, S, L, C>
where
    P: PatientDirectory,
    S: RecordStore,
    L: AccessLogRepository,
    C: DocumentCategorizer,
{
    pub fn new(
        broker: Arc<OtpAccessBroker>,
        patients: Arc<P>,
        records: Arc<S>,
        access_logs: Arc<L>,
        categorizer: Arc<C>,
    ) -> Self {
        Self {
            sharing: Arc::new(AccessSharingService::new(
                broker,
                patients.clone(),
                access_logs.clone(),
            )),
            records: Arc::new(RecordService::new(patients.clone(), records, access_logs)),
            patients,
            categorizer,
        }
    }
}

/// State backed by the in-memory stores and the keyword categorizer
pub type InMemoryAppState = AppState<
    InMemoryPatientDirectory,
    InMemoryRecordStore,
    InMemoryAccessLogRepository,
    KeywordCategorizer,
>;

impl InMemoryAppState {
    pub fn in_memory(broker: Arc<OtpAccessBroker>, stores: &InMemoryStores) -> Self {
        Self::new(
            broker,
            stores.patients.clone(),
            stores.records.clone(),
            stores.access_logs.clone(),
            Arc::new(KeywordCategorizer::new()),
        )
    }
}

/// Register every route for the given collaborators
pub fn configure<P, S, L, C>(cfg: &mut web::ServiceConfig)
where
    P: PatientDirectory + 'static,
    S: RecordStore + 'static,
    L: AccessLogRepository + 'static,
    C: DocumentCategorizer + 'static,
{
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/access")
                        .route("/share", web::post().to(access::share::<P, S, L, C>))
                        .route("/verify", web::post().to(access::verify::<P, S, L, C>))
                        .route("/revoke", web::post().to(access::revoke::<P, S, L, C>)),
                )
                .route(
                    "/patients/{username}",
                    web::get().to(patients::get_patient::<P, S, L, C>),
                )
                .service(
                    web::scope("/records")
                        .route("/{user_id}", web::get().to(records::history::<P, S, L, C>))
                        .route("/{user_id}", web::post().to(records::upload::<P, S, L, C>))
                        .route(
                            "/{user_id}/access-log",
                            web::get().to(records::access_log::<P, S, L, C>),
                        ),
                )
                .route(
                    "/documents/categorize",
                    web::post().to(documents::categorize::<P, S, L, C>),
                ),
        )
        .default_service(web::route().to(not_found));
}

/// Routes for [`InMemoryAppState`]
pub fn configure_in_memory(cfg: &mut web::ServiceConfig) {
    configure::<
        InMemoryPatientDirectory,
        InMemoryRecordStore,
        InMemoryAccessLogRepository,
        KeywordCategorizer,
    >(cfg);
}

/// JSON extractor settings; malformed bodies become `BAD_REQUEST` errors
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

/// Query extractor settings; malformed query strings become `BAD_REQUEST` errors
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(error_codes::NOT_FOUND, "Route not found"))
}
