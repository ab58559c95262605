pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::summary::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/summaries", post(handlers::handle_generate_summary))
        .route(
            "/api/v1/summaries/validate",
            post(handlers::handle_validate_summary),
        )
        .with_state(state)
}
