//! Shared application state for the web server.

use std::sync::Arc;
use theranova_db::AnalysisStore;
use theranova_scoring::ScoringClient;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Remote repurposing scorer
    pub scorer: Arc<dyn ScoringClient>,
    /// Saved analysis persistence
    pub store: AnalysisStore,
}

impl AppState {
    pub fn new(scorer: Arc<dyn ScoringClient>, store: AnalysisStore) -> Self {
        Self { scorer, store }
    }
}

pub type SharedState = Arc<AppState>;
