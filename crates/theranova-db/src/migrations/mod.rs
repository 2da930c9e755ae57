//! Database migrations.

use crate::database::Database;
use crate::error::Result;
use crate::schema::SAVED_ANALYSIS_DDL;
use rusqlite_migration::{Migrations, M};

fn migrations() -> Migrations<'static> {
    Migrations::new(vec![M::up(SAVED_ANALYSIS_DDL)])
}

/// Bring the schema to the latest version. Safe to call repeatedly.
pub fn run_migrations(db: &Database) -> Result<()> {
    let migrations = migrations();
    db.with_conn_mut(|conn| {
        migrations.to_latest(conn)?;
        Ok(())
    })
}
