//! Saved analyses: POST and GET /api/analyses

use axum::{extract::{rejection::JsonRejection, State}, response::IntoResponse, Json};
use theranova_common::AnalyzeResponse;
use crate::error::ApiError;
use crate::state::SharedState;

/// Persist a complete analysis under its analysisId, replacing any
/// earlier save with the same id. Echoes the stored record.
pub async fn save_analysis(
    State(state): State<SharedState>,
    payload: Result<Json<AnalyzeResponse>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(response) = payload?;
    let store = state.store.clone();
    let record = tokio::task::spawn_blocking(move || store.save(&response)).await??;
    Ok(Json(record))
}

/// List every saved analysis as `{id, jsonData}` records.
pub async fn list_analyses(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    let records = tokio::task::spawn_blocking(move || store.list_all()).await??;
    Ok(Json(records))
}
