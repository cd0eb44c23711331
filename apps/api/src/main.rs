use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobboard_api::catalog::Catalog;
use jobboard_api::config::Config;
use jobboard_api::errors::handle_panic;
use jobboard_api::routes::build_router;
use jobboard_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{crate_name}={level},tower_http={level}",
                crate_name = env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::seeded(),
    };
    info!("Catalog ready with {} jobs", catalog.len());

    if !config.jobs_latency.is_zero() || !config.applications_latency.is_zero() {
        info!(
            "Simulated latency: jobs {:?}, applications {:?}",
            config.jobs_latency, config.applications_latency
        );
    }

    let state = AppState::new(catalog, config.clone());

    let app = build_router(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
