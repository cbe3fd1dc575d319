mod api_doc;
mod app;
mod config;
mod error;
mod greeting;
mod handlers;
mod routes;
mod sink;
mod state;
mod text_art;

use anyhow::Context;
use config::Config;
use state::AppState;
use std::sync::Arc;
use text_art::Cowsay;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("hello-fixtures starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        config: Arc::new(config),
        text_art: Arc::new(Cowsay::default()),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app::router(state))
        .await
        .context("Server error")?;

    Ok(())
}
