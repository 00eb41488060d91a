pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ranking::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Ranking API
        .route("/api/v1/rankings", post(handlers::handle_rank))
        .route("/api/v1/rankings/csv", post(handlers::handle_rank_csv))
        .route("/api/v1/rankings/upload", post(handlers::handle_upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
