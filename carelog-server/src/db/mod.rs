//! Database layer: connection pool, schema initialization, repositories

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod repos;
pub mod schema;

/// Default maximum connections for the pool.
/// Kept low for a single-file SQLite store.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool at the given path.
///
/// Creates the database file (and parent directory) if missing.
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    // Foreign keys are declared but not enforced (see schema.rs); sqlx
    // enables the pragma by default, so disable it per connection.
    let connect_options = SqliteConnectOptions::from_str(&db_url)?.foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(connect_options)
        .await?;

    // WAL keeps concurrent reads from blocking on writes
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await?;

    Ok(pool)
}

/// In-memory pool with schema applied, for tests.
///
/// Limited to a single connection: every new `sqlite::memory:` connection
/// would otherwise be a distinct empty database.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("memory connect options")
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options)
        .await
        .expect("in-memory pool");
    schema::init(&pool).await.expect("schema init");
    pool
}
