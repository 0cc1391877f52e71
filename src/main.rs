//! ML.DEV Portfolio Server
//!
//! Usage:
//!   cargo run --bin mldev_portfolio
//!
//! Environment:
//!   PORT / PORTFOLIO_PORT - Server port (default: 5174)
//!   PORTFOLIO_HOST        - Server host (default: 0.0.0.0)
//!   RUST_LOG              - Log filter (default: info)

use axum::{extract::Request, ServiceExt};
use mldev_portfolio::{create_app, AppState, Catalog, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    let catalog = Catalog::default();
    info!(
        projects = catalog.projects.len(),
        skills = catalog.skills.technical.len(),
        "Catalog loaded"
    );

    let state = Arc::new(AppState::new(catalog));
    let app = create_app(state);

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /              - Portfolio page");
    info!("  GET  /api/health    - Health check");
    info!("  GET  /api/projects  - Project list");
    info!("  GET  /api/skills    - Skill set");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Shutdown signal received, server stopped");
    Ok(())
}
