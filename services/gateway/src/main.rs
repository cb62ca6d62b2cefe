mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use config::GatewayConfig;
use matching_engine::{EpitopeMatcher, JsonFileSource};
use router::create_router;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting epitope gateway");

    let config = GatewayConfig::from_env()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        dataset = %config.dataset_path.display(),
        warm_on_start = config.warm_on_start,
        "Configuration loaded"
    );

    let matcher = EpitopeMatcher::from_source(Arc::new(JsonFileSource::new(&config.dataset_path)));

    // A failed warm-up is not fatal; the first request retries the load
    if config.warm_on_start {
        let warm = matcher.clone();
        match tokio::task::spawn_blocking(move || warm.warm_up()).await? {
            Ok(epitopes) => tracing::info!(epitopes, "Dataset warmed"),
            Err(e) => tracing::warn!(error = %e, "Dataset warm-up failed, will retry on demand"),
        }
    }

    // Create router
    let app = create_router(AppState::new(matcher));

    // Bind and serve
    let listener = TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
