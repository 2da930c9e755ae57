//! Liveness and scoring service health.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use tracing::warn;
use crate::state::SharedState;

pub const HEALTH_MESSAGE: &str = "Backend running successfully!";

/// GET /api/health: plain-text liveness probe. Touches no dependency.
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringHealth {
    pub status: &'static str,
    pub scoring_service: &'static str,
}

/// GET /api/health/scoring: reports whether the remote scorer answers.
/// Always 200; a down scorer only degrades the status.
pub async fn scoring_health(State(state): State<SharedState>) -> impl IntoResponse {
    let up = match state.scorer.health_check().await {
        Ok(up) => up,
        Err(e) => {
            warn!(base_url = %state.scorer.base_url(), "Scoring health check failed: {}", e);
            false
        }
    };

    Json(ScoringHealth {
        status: if up { "ok" } else { "degraded" },
        scoring_service: if up { "up" } else { "down" },
    })
}
