// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the storage risk advisor
// Usage: cargo run --features api --bin api_server

use harvest_risk_advisor::{AppState, create_router};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "harvest_risk_advisor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    // KNOWLEDGE_BASE_PATH unset: built-in rule table
    let knowledge_base_path = std::env::var("KNOWLEDGE_BASE_PATH").ok();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!(
        "  KNOWLEDGE_BASE_PATH: {}",
        knowledge_base_path.as_deref().unwrap_or("(built-in)")
    );
    tracing::info!("  PORT: {}", port);

    let state = AppState::new(knowledge_base_path.as_deref())?;

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
