//! Chainfolio — Binary Entrypoint
//! Boots the Axum HTTP server serving the four portfolio sections as
//! JSON, backed by a single GitHub repository source.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chainfolio::api::{router, AppState};
use chainfolio::config::Config;
use chainfolio::fetch::GithubClient;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = Config::from_env();
    let client = GithubClient::new(&cfg)?;
    let state = AppState::new(Arc::new(client), cfg.featured_limit);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "chainfolio listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
