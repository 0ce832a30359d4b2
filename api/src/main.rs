mod answer_response;
mod app_state;
mod auth;
mod error_handler;
mod query_payload;
mod routes;
mod utils;

use anyhow::{Context, Result};
use app_state::AppState;
use menu_assistant::{AssistantConfig, OpenAiService};
use std::sync::Arc;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = AssistantConfig::from_env()?;
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let completion_service = Arc::new(OpenAiService::new(&config));
    log::info!("Using model {} at {}", completion_service.model(), config.base_url);

    let state = AppState::new(&config, completion_service)?;
    let app = routes::router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
