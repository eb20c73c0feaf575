//! Rust structs mapping to database tables.
//!
//! Each model implements `from_row` for constructing itself from a
//! `rusqlite::Row`.

use pup_core::Tally;

/// A durable row of the `votes` table: one image's tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteRecord {
    /// Surrogate row key.
    pub id: i64,
    /// The image id the tally belongs to (unique).
    pub puppy_id: String,
    pub up_votes: i64,
    pub down_votes: i64,
}

impl VoteRecord {
    /// Build from a row selected as:
    /// id, puppy_id, up_votes, down_votes
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            puppy_id: row.get(1)?,
            up_votes: row.get(2)?,
            down_votes: row.get(3)?,
        })
    }

    /// The (up, down) pair this row persists.
    pub fn tally(&self) -> Tally {
        Tally {
            up: self.up_votes,
            down: self.down_votes,
        }
    }
}
