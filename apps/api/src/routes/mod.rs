pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::wizard::handlers;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Wizard screens (HTML)
        .route("/", get(handlers::handle_show))
        .route("/start", post(handlers::handle_start))
        .route("/details", post(handlers::handle_details))
        .route("/resume", post(handlers::handle_resume))
        .route("/retry", post(handlers::handle_retry))
        .route("/restart", post(handlers::handle_restart))
        // Session snapshot (JSON)
        .route("/api/v1/session", get(handlers::handle_snapshot))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
