//! HealthAI Assistant
//!
//! Main entry point: load configuration and the patient snapshot, wire the
//! generation client into the dispatcher, and serve the JSON API.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use healthai::api;
use healthai::api::handlers::AppState;
use healthai::config;
use healthai::core::data::{JsonFileSource, PatientDataSource};
use healthai::core::dispatcher::QueryDispatcher;
use healthai::core::generate::GraniteClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load_config().context("failed to load configuration")?;

    let snapshot = JsonFileSource::new(&config.data.patient_file)
        .load()
        .context("failed to load patient snapshot")?;
    tracing::info!(vitals = snapshot.vitals.len(), "patient snapshot loaded");

    let generator = Arc::new(GraniteClient::new(&config.backend));
    let state = web::Data::new(AppState {
        dispatcher: QueryDispatcher::new(generator),
        snapshot,
    });

    let bind = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(%bind, "starting HealthAI server");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(api::configure)
    })
    .bind(&bind)?
    .run()
    .await?;

    Ok(())
}
