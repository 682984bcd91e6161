mod config;
mod errors;
mod llm_client;
mod profile;
mod render;
mod roadmap;
mod routes;
mod state;
#[cfg(test)]
mod test_support;
mod wizard;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::roadmap::GeminiRoadmapRequester;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HeroPath v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Gemini client
    let llm = GeminiClient::with_api_base(
        config.gemini_api_key.clone(),
        config.gemini_api_base.clone(),
    );
    info!("Gemini client initialized (model: {})", llm_client::MODEL);

    let requester = Arc::new(GeminiRoadmapRequester::new(llm));
    info!("Upload limit: {} bytes per request", config.max_upload_bytes);

    let state = AppState::new(requester, config.clone());

    let app = build_router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
