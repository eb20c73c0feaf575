//! Vote tally operations.

use pup_core::{Error, Image, Result};
use rusqlite::Connection;

use crate::models::VoteRecord;

const COLS: &str = "id, puppy_id, up_votes, down_votes";

/// Write one row per image inside a single transaction.
///
/// Rows are created on first flush and updated on later flushes, keyed on
/// `puppy_id`. Any per-row failure aborts the whole transaction; there is
/// no partial commit. Returns the number of rows written.
pub fn bulk_upsert(conn: &Connection, images: &[Image]) -> Result<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::storage("bulk_upsert", e.to_string()))?;

    {
        let mut stmt = tx
            .prepare(
                "INSERT INTO votes (puppy_id, up_votes, down_votes) VALUES (?1, ?2, ?3)
                 ON CONFLICT(puppy_id) DO UPDATE SET
                    up_votes = excluded.up_votes,
                    down_votes = excluded.down_votes",
            )
            .map_err(|e| Error::storage("bulk_upsert", e.to_string()))?;

        for image in images {
            stmt.execute(rusqlite::params![
                &image.id,
                image.up_votes,
                image.down_votes
            ])
            .map_err(|e| {
                Error::storage("bulk_upsert", format!("puppy_id {}: {e}", image.id))
            })?;
        }
    }

    tx.commit()
        .map_err(|e| Error::storage("bulk_upsert", e.to_string()))?;

    Ok(images.len())
}

/// Load the persisted records for a set of image ids.
///
/// Builds a `puppy_id IN (...)` query with one placeholder per id. The
/// empty id set is special-cased: zero placeholders would be a malformed
/// query, so it returns no rows without touching the database.
pub fn load_by_ids(conn: &Connection, ids: &[String]) -> Result<Vec<VoteRecord>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders: Vec<String> = (1..=ids.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "SELECT {COLS} FROM votes WHERE puppy_id IN ({}) ORDER BY id",
        placeholders.join(",")
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| Error::storage("load_by_ids", e.to_string()))?;
    let rows = stmt
        .query_map(rusqlite::params_from_iter(ids), VoteRecord::from_row)
        .map_err(|e| Error::storage("load_by_ids", e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::storage("load_by_ids", e.to_string()))?;
    Ok(rows)
}

/// Get the persisted record for a single image id.
pub fn get_by_puppy_id(conn: &Connection, puppy_id: &str) -> Result<Option<VoteRecord>> {
    let q = format!("SELECT {COLS} FROM votes WHERE puppy_id = ?1");
    let result = conn.query_row(&q, [puppy_id], VoteRecord::from_row);
    match result {
        Ok(r) => Ok(Some(r)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::storage("get_by_puppy_id", e.to_string())),
    }
}

/// Delete every row. Used for cold-start initialization.
pub fn clear_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM votes", [])
        .map_err(|e| Error::storage("clear_all", e.to_string()))
}
