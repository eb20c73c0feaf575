//! Connection pool management for SQLite via r2d2.

use std::path::Path;

use pup_core::{Error, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::migrations;

/// Type alias for the database connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Initialize a database pool backed by a file on disk.
///
/// When `reset` is set the existing database file is deleted first, giving
/// a cold start. Creates the SQLite file if it does not exist, enables WAL
/// journal mode on every new connection, and runs pending migrations.
/// Failures are reported as [`Error::StorageUnavailable`]; the caller
/// decides whether startup is fail-fast.
pub fn init_pool(db_path: &Path, reset: bool) -> Result<DbPool> {
    if reset {
        match std::fs::remove_file(db_path) {
            Ok(()) => tracing::info!("Removed existing database at {}", db_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::from(e)),
        }
    }

    let manager = SqliteConnectionManager::file(db_path)
        .with_init(|conn| conn.execute_batch("PRAGMA journal_mode = WAL;"));

    let pool = Pool::builder()
        .max_size(4)
        .build(manager)
        .map_err(|e| Error::storage_unavailable(format!("Failed to create connection pool: {e}")))?;

    let conn = pool.get().map_err(|e| {
        Error::storage_unavailable(format!("Failed to get connection for migrations: {e}"))
    })?;

    migrations::run_migrations(&conn)?;

    Ok(pool)
}

/// Initialize an in-memory database pool (useful for tests).
///
/// Each call creates a uniquely-named shared-cache in-memory database so
/// that parallel tests do not interfere with each other, while all
/// connections *within* a single pool still share state.
pub fn init_memory_pool() -> Result<DbPool> {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let uri = format!("file:memdb_{n}?mode=memory&cache=shared");

    let manager = SqliteConnectionManager::file(uri);

    let pool = Pool::builder()
        .max_size(4)
        .build(manager)
        .map_err(|e| Error::storage_unavailable(format!("Failed to create in-memory pool: {e}")))?;

    let conn = pool.get().map_err(|e| {
        Error::storage_unavailable(format!("Failed to get connection for migrations: {e}"))
    })?;

    migrations::run_migrations(&conn)?;

    Ok(pool)
}

/// Convenience helper to get a connection from the pool.
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get()
        .map_err(|e| Error::storage_unavailable(format!("Failed to get connection from pool: {e}")))
}
