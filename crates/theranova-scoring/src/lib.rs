//! theranova-scoring: Remote repurposing scorer and verdict classification.

pub mod client;
pub mod error;
pub mod verdict;

pub use client::{HttpScoringClient, MockFailure, MockScoringClient, ScoringClient};
pub use error::{Result, ScoringError};
pub use verdict::{apply_verdict, classify, Verdict};

use theranova_common::{AnalyzeRequest, AnalyzeResponse};
use tracing::{debug, info};

/// Validate the request, score it remotely and attach the local verdict.
/// Everything else, `analysisId` included, is returned as the scorer sent it.
///
/// Fails with `InvalidArgument` before any network call when either field
/// is missing.
pub async fn analyze(
    client: &dyn ScoringClient,
    request: &AnalyzeRequest,
) -> Result<AnalyzeResponse> {
    if !request.is_complete() {
        return Err(ScoringError::InvalidArgument(
            "Molecule + Disease required".to_string(),
        ));
    }

    let mut response = client.score(request).await?;
    let verdict = apply_verdict(&mut response);

    if response.analysis_id.is_empty() {
        debug!("Scorer sent no analysisId; returning it empty");
    }

    info!(
        molecule = %response.molecule,
        disease = %response.disease,
        score = response.repurpose_score,
        verdict = ?verdict,
        "Analysis scored"
    );
    Ok(response)
}
