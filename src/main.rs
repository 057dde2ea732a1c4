//! JsJudge - Application Entry Point
//!
//! This is the main entry point for the JsJudge server.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jsjudge::{catalog::ProblemCatalog, config::CONFIG, handlers, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting JsJudge server...");
    tracing::info!(
        time_budget_ms = CONFIG.judge.time_budget.as_millis() as u64,
        max_heap_mb = CONFIG.judge.max_heap_bytes / (1024 * 1024),
        max_concurrent = CONFIG.judge.max_concurrent,
        entry_point = %CONFIG.judge.entry_point_name,
        "Judge configured"
    );

    // Load the problem catalog
    let catalog = match &CONFIG.catalog.path {
        Some(path) => ProblemCatalog::load(path)?,
        None => ProblemCatalog::builtin(),
    };
    tracing::info!("Serving {} problems", catalog.len());

    // Create application state and router
    let state = AppState::new(catalog, CONFIG.clone());
    let app = handlers::create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
