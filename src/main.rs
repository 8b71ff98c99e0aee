//! HTTP server for the timecard engine.
//!
//! Reads its configuration from the directory named by `TIMECARD_CONFIG`
//! (default `config/california`) and listens on `TIMECARD_ADDR`
//! (default `0.0.0.0:3000`). Log verbosity follows `RUST_LOG`.

use std::env;

use timecard_engine::api::{AppState, create_router};
use timecard_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("TIMECARD_CONFIG").unwrap_or_else(|_| "config/california".to_string());
    let addr = env::var("TIMECARD_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let state = AppState::new(config)?;
    info!(
        config = %config_dir,
        jurisdiction = state.jurisdiction().code(),
        timecards = %state.config().payroll().timecard_dir,
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
