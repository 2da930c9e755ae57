//! Analysis store: persists complete analyze responses keyed by analysis id.

use crate::analyses::SavedAnalysisRepository;
use crate::codec::PayloadCodec;
use crate::database::Database;
use crate::error::{DbError, Result};
use std::sync::Arc;
use theranova_common::{AnalyzeResponse, SavedAnalysisRecord};
use tracing::{debug, info};

#[derive(Clone)]
pub struct AnalysisStore {
    repo: SavedAnalysisRepository,
    codec: PayloadCodec,
}

impl AnalysisStore {
    pub fn new(db: Arc<Database>, codec: PayloadCodec) -> Self {
        Self {
            repo: SavedAnalysisRepository::new(db),
            codec,
        }
    }

    /// Serialize `response` and upsert it under its analysis id. Returns the
    /// record exactly as written.
    pub fn save(&self, response: &AnalyzeResponse) -> Result<SavedAnalysisRecord> {
        if response.analysis_id.is_empty() {
            return Err(DbError::MissingId);
        }

        let json_data = self.codec.encode(response)?;
        let record = SavedAnalysisRecord::new(response.analysis_id.clone(), json_data);
        self.repo.upsert(&record)?;

        info!(id = %record.id, bytes = record.json_data.len(), "Saved analysis");
        Ok(record)
    }

    /// All saved analyses. Ordering is not part of the contract.
    pub fn list_all(&self) -> Result<Vec<SavedAnalysisRecord>> {
        let records = self.repo.list_all()?;
        debug!(count = records.len(), "Listed saved analyses");
        Ok(records)
    }

    pub fn get(&self, id: &str) -> Result<Option<SavedAnalysisRecord>> {
        self.repo.find_by_id(id)
    }

    /// Parse a stored payload back into a response.
    pub fn decode(&self, record: &SavedAnalysisRecord) -> Result<AnalyzeResponse> {
        self.codec.decode(&record.json_data)
    }
}
