//! Embedded SQL migrations and runner.
//!
//! Migrations are stored as `&str` constants and executed in order.  A
//! `schema_migrations` table tracks which versions have been applied.

use pup_core::{Error, Result};
use rusqlite::Connection;

/// V1: initial schema -- the per-image vote tallies.
///
/// `puppy_id` is the Flickr photo id; `id` is a surrogate row key.
const V1_VOTES: &str = r#"
CREATE TABLE votes (
    id         INTEGER PRIMARY KEY,
    puppy_id   TEXT UNIQUE NOT NULL,
    up_votes   INTEGER NOT NULL DEFAULT 0,
    down_votes INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_votes_puppy_id ON votes(puppy_id);
"#;

/// Ordered list of (version, sql) pairs.
const MIGRATIONS: &[(i64, &str)] = &[(1, V1_VOTES)];

/// Run all pending migrations on `conn`.
///
/// Creates the `schema_migrations` tracking table if it does not exist,
/// then applies each outstanding migration inside a transaction.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )
    .map_err(|e| Error::storage("migrations", format!("Failed to create schema_migrations: {e}")))?;

    for &(version, sql) in MIGRATIONS {
        let already: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM schema_migrations WHERE version = ?1",
                [version],
                |row| row.get(0),
            )
            .map_err(|e| Error::storage("migrations", e.to_string()))?;

        if already {
            continue;
        }

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| Error::storage("migrations", e.to_string()))?;

        tx.execute_batch(sql)
            .map_err(|e| Error::storage("migrations", format!("Migration V{version} failed: {e}")))?;

        tx.execute(
            "INSERT INTO schema_migrations (version) VALUES (?1)",
            [version],
        )
        .map_err(|e| Error::storage("migrations", e.to_string()))?;

        tx.commit()
            .map_err(|e| Error::storage("migrations", e.to_string()))?;
    }

    Ok(())
}
