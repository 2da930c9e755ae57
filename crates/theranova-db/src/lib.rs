//! TheraNova Database Layer
//!
//! Embedded SQLite storage for saved analyses. A single table keyed by
//! analysis id holds the full analyze response as JSON text.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use theranova_db::{AnalysisStore, Database, PayloadCodec};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::open("./data/theranova.db")?;
//!     db.initialize()?;
//!
//!     let store = AnalysisStore::new(Arc::new(db), PayloadCodec::new());
//!     for record in store.list_all()? {
//!         println!("{}", record.id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod analyses;
pub mod codec;
pub mod database;
pub mod error;
pub mod migrations;
pub mod schema;
pub mod store;

pub use analyses::SavedAnalysisRepository;
pub use codec::PayloadCodec;
pub use database::Database;
pub use error::{DbError, Result};
pub use store::AnalysisStore;
