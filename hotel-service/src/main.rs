//! hotel-service: synthetic hotel catalog over HTTP
//!
//! Serves generated hotels as raw records or as search-result view models,
//! optionally flavored for a city. Set `HOTEL_RNG_SEED` for reproducible
//! catalogs.

mod api;
mod config;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_service=info,hotel_gen=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        environment = %config.environment,
        max_batch_size = config.max_batch_size,
        seeded = config.rng_seed.is_some(),
        "Starting hotel-service"
    );

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let app = api::router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("hotel-service HTTP listening on {http_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("hotel-service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
