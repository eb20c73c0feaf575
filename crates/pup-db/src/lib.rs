//! pup-db: database access and persistence layer.
//!
//! This crate provides SQLite-backed storage with connection pooling,
//! embedded migrations, the typed vote-record model, and the query module
//! for the votes table.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
