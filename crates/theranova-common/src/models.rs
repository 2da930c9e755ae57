//! Request/response payloads for repurposing analyses.
//!
//! Field names follow the camelCase JSON contract of the scoring service
//! (`repurposeScore`, `evidenceHighlights`, ...). Trial and competitor entries
//! are owned by the scorer and carried through untouched, whatever their shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Analyze request
// ---------------------------------------------------------------------------

/// Molecule/disease pair submitted for scoring.
///
/// Both fields are optional on the wire so a missing or `null` field can be
/// reported as a client error rather than a JSON rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub molecule: Option<String>,
    pub disease: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(molecule: impl Into<String>, disease: impl Into<String>) -> Self {
        Self {
            molecule: Some(molecule.into()),
            disease: Some(disease.into()),
        }
    }

    /// True when both `molecule` and `disease` are present.
    pub fn is_complete(&self) -> bool {
        self.molecule.is_some() && self.disease.is_some()
    }
}

// ---------------------------------------------------------------------------
// Analyze response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub molecule: String,
    pub disease: String,
    pub repurpose_score: f64,
    /// Recomputed locally from `repurpose_score`; the scorer's value is discarded.
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall_verdict: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trials: Vec<TrialSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub competitors: Vec<CompetitorSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub evidence_highlights: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub analysis_id: String,
}

/// One clinical-trial registry hit reported by the scorer, e.g.
/// `{"registryId": "NCT0001", "phase": "Phase-3", ...}`. Kept verbatim.
pub type TrialSummary = Value;

/// A competing programme for the same disease, e.g.
/// `{"company": "NeuroGenix", "trialId": "NCT9001", ...}`. Kept verbatim.
pub type CompetitorSummary = Value;

// ---------------------------------------------------------------------------
// Saved analysis
// ---------------------------------------------------------------------------

/// Row of the `saved_analysis` table: analysis id plus the serialized response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAnalysisRecord {
    pub id: String,
    pub json_data: String,
}

impl SavedAnalysisRecord {
    pub fn new(id: impl Into<String>, json_data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            json_data: json_data.into(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
