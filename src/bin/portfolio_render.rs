//! Render the portfolio page from a running API
//!
//! Falls back to the bundled data when the API cannot be reached, so this
//! always prints a complete page.
//!
//! Usage:
//!   cargo run --bin portfolio_render > index.html
//!
//! Environment:
//!   PORTFOLIO_API_URL - API base URL (default: http://localhost:5174)
//!   RUST_LOG          - Log filter (default: warn)

use mldev_portfolio::{render_page, ClientConfig, PortfolioClient};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Logs go to stderr; stdout carries the page
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = ClientConfig::from_env()?;
    let client = PortfolioClient::from_config(&config);
    info!(api_url = client.base_url(), "Fetching page data");

    let data = client.fetch_page_data().await;
    print!("{}", render_page(&data));

    Ok(())
}
