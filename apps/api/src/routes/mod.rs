pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume/score", post(handlers::handle_score))
        .route("/api/v1/resume/score-pdf", post(handlers::handle_score_pdf))
        .route("/api/v1/resume/history", get(handlers::handle_history))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
