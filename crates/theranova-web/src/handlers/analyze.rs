//! POST /api/analyze

use axum::{extract::{rejection::JsonRejection, State}, response::IntoResponse, Json};
use theranova_common::AnalyzeRequest;
use crate::error::ApiError;
use crate::state::SharedState;

/// Score a molecule/disease pair and return the result with a local verdict.
/// Nothing is persisted here.
pub async fn analyze(
    State(state): State<SharedState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let response = theranova_scoring::analyze(state.scorer.as_ref(), &request).await?;
    Ok(Json(response))
}
