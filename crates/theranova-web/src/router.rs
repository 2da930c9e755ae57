//! Axum router: maps the /api paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    analyses::{list_analyses, save_analysis},
    analyze::analyze,
    system::{health, scoring_health},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    let api = Router::new()
        .route("/health",         get(health))
        .route("/health/scoring", get(scoring_health))
        .route("/analyze",        post(analyze))
        .route("/analyses",       get(list_analyses).post(save_analysis));

    Router::new()
        .nest("/api", api)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
