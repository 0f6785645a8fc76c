//! Repositories for database access
//!
//! One module per entity. Each owns its row struct and SQL; every
//! statement binds positional parameters, never concatenated values.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

pub mod alerts;
pub mod medications;
pub mod sleep_patterns;
pub mod status_updates;
pub mod users;

pub use alerts::{AlertRepo, EmergencyAlert};
pub use medications::{Medication, MedicationRepo};
pub use sleep_patterns::{SleepPattern, SleepPatternRepo};
pub use status_updates::{StatusUpdate, StatusUpdateRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Run a user-scoped list query: one `?` placeholder bound to the user id.
///
/// Every per-user listing goes through here so the SELECT/bind/fetch
/// pattern lives in one place.
pub(crate) async fn list_scoped<T>(
    pool: &SqlitePool,
    sql: &str,
    user_id: i64,
) -> Result<Vec<T>, DbError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let rows = sqlx::query_as::<_, T>(sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Timestamp string for server-side stamped columns, matching the
/// `CURRENT_TIMESTAMP` format SQLite uses for column defaults.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
