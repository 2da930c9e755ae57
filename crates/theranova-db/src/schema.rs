//! Table definitions.

/// One row per saved analysis: the analysis id and the full response as JSON.
pub const SAVED_ANALYSIS_DDL: &str = "
CREATE TABLE IF NOT EXISTS saved_analysis (
    id        TEXT PRIMARY KEY NOT NULL,
    json_data TEXT NOT NULL
);
";
