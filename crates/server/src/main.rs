mod routes;

use std::sync::Arc;

use anyhow::Result;
use gharseva_core::config::{AppConfig, LoadOptions};
use gharseva_core::BookingDesk;

fn init_logging(config: &AppConfig) {
    use gharseva_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let desk = Arc::new(BookingDesk::new(
        config.pricing.clone(),
        config.currency_symbol.clone(),
    ));
    let app = routes::router(desk);

    let address = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        event_name = "system.server.started",
        bind_address = %address,
        "booking assistant listening"
    );
    tracing::info!(
        event_name = "system.server.routes",
        "POST /chat/preview, POST /chat/confirm, POST /chat/modify, GET /bookings, GET /"
    );

    axum::serve(listener, app).with_graceful_shutdown(wait_for_shutdown()).await?;

    tracing::info!(event_name = "system.server.stopping", "booking assistant stopping");
    Ok(())
}

async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
}
