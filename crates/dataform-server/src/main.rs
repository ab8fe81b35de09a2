mod config;
mod routes;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::routes::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = Config::load_default().unwrap_or_else(|e| {
        warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });

    if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        config.server.port = port;
    }

    info!(
        "Serving form with {} fields ({})",
        config.form.fields.len(),
        config.form.class_name
    );

    let addr = config.address();
    let app = router(AppState::new(config.form));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
