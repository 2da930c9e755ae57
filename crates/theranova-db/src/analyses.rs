//! Saved analysis repository.
//!
//! Row-level access to `saved_analysis`. Payloads are opaque strings here;
//! encoding lives in [`crate::store::AnalysisStore`].

use crate::database::Database;
use crate::error::Result;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;
use theranova_common::SavedAnalysisRecord;

/// Repository for saved analysis rows.
#[derive(Clone)]
pub struct SavedAnalysisRepository {
    db: Arc<Database>,
}

impl SavedAnalysisRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert the record, or replace the payload of the row with the same id.
    pub fn upsert(&self, record: &SavedAnalysisRecord) -> Result<()> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO saved_analysis (id, json_data) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET json_data = excluded.json_data",
                params![record.id, record.json_data],
            )?;
            Ok(())
        })
    }

    /// Find a record by id.
    pub fn find_by_id(&self, id: &str) -> Result<Option<SavedAnalysisRecord>> {
        self.db.with_conn(|conn| {
            let record = conn
                .query_row(
                    "SELECT id, json_data FROM saved_analysis WHERE id = ?1",
                    params![id],
                    row_to_record,
                )
                .optional()?;
            Ok(record)
        })
    }

    /// Every stored record, in insertion order.
    pub fn list_all(&self) -> Result<Vec<SavedAnalysisRecord>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, json_data FROM saved_analysis ORDER BY rowid")?;
            let rows = stmt.query_map([], row_to_record)?;
            let records = rows.collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(records)
        })
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<SavedAnalysisRecord> {
    Ok(SavedAnalysisRecord {
        id: row.get(0)?,
        json_data: row.get(1)?,
    })
}
