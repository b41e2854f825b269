pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/score", post(handlers::handle_score))
        .route(
            "/api/v1/resumes/skills/canonicalize",
            post(handlers::handle_canonicalize),
        )
        .route(
            "/api/v1/resumes/suggestions",
            post(handlers::handle_suggestions),
        )
        .with_state(state)
}
