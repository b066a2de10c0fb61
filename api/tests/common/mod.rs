#![allow(dead_code, unused_macros)]

use actix_web::web;
use chrono::Duration;
use serde_json::Value;
use std::sync::Arc;

use mp_api::app::InMemoryAppState;
use mp_core::clock::ManualClock;
use mp_core::services::{OtpAccessBroker, OtpBrokerConfig};
use mp_infra::InMemoryStores;

pub const PATIENT_USERNAME: &str = "patient123";
pub const PATIENT_ID: &str = mp_infra::JOHN_DOE_ID;
pub const STAFF_ID: &str = "staff-42";

/// Seeded stores and a broker driven by a manual clock
pub struct TestContext {
    pub state: web::Data<InMemoryAppState>,
    pub stores: InMemoryStores,
    pub clock: Arc<ManualClock>,
}

impl TestContext {
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::starting_now());
        let broker = Arc::new(OtpAccessBroker::new(OtpBrokerConfig::default(), clock.clone()));
        let stores = InMemoryStores::seeded();
        let state = web::Data::new(InMemoryAppState::in_memory(broker, &stores));

        Self { state, stores, clock }
    }

    pub fn advance(&self, seconds: i64) {
        self.clock.advance(Duration::seconds(seconds));
    }
}

/// Build the full application around a [`TestContext`]
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($ctx.state.clone())
                .app_data(mp_api::app::json_config(64 * 1024))
                .app_data(mp_api::app::query_config())
                .configure(mp_api::app::configure_in_memory),
        )
        .await
    };
}

/// Share access for a patient and return the issued code
macro_rules! share_code {
    ($app:expr, $username:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/v1/access/share")
            .set_json($crate::common::share_body($username))
            .to_request();
        let body: serde_json::Value = actix_web::test::call_and_read_body_json(&$app, req).await;
        body["data"]["code"]
            .as_str()
            .expect("share response carries a code")
            .to_string()
    }};
}

pub fn share_body(username: &str) -> Value {
    serde_json::json!({ "username": username })
}

pub fn verify_body(username: &str, code: &str) -> Value {
    serde_json::json!({ "username": username, "code": code, "accessor_id": STAFF_ID })
}
