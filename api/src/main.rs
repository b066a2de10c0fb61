use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use mp_api::app::{configure_in_memory, json_config, query_config, InMemoryAppState};
use mp_api::config::load_config;
use mp_api::middleware::create_cors;
use mp_api::telemetry::init_tracing;
use mp_core::services::{OtpAccessBroker, OtpBrokerConfig, OtpSweeper, OtpSweeperConfig};
use mp_infra::InMemoryStores;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let loaded = load_config();
    let config = loaded.config;
    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        env_file_loaded = loaded.env_file_loaded,
        dotenv_loaded = loaded.dotenv_loaded,
        "Starting MedPortal API server"
    );

    let broker = Arc::new(OtpAccessBroker::with_system_clock(OtpBrokerConfig::from(
        &config.otp,
    )));
    let sweeper = Arc::new(OtpSweeper::new(
        broker.clone(),
        OtpSweeperConfig::from(&config.otp),
    ));
    let _sweeper_handle = sweeper.start_background_task();

    let stores = InMemoryStores::seeded();
    let state = web::Data::new(InMemoryAppState::in_memory(broker, &stores));

    let environment = config.environment;
    let max_payload_size = config.server.max_payload_size;
    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config(max_payload_size))
            .app_data(query_config())
            .wrap(create_cors(environment))
            .wrap(TracingLogger::default())
            .configure(configure_in_memory)
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    info!("Server stopped");
    Ok(())
}
