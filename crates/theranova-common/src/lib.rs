//! theranova-common: Wire types shared by the scoring client, the analysis
//! store and the HTTP API.

pub mod models;

pub use models::{
    AnalyzeRequest, AnalyzeResponse, CompetitorSummary, SavedAnalysisRecord, TrialSummary,
};
