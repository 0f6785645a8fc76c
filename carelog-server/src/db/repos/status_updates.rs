//! Caregiver status update repository

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{list_scoped, now_timestamp, DbError};

/// Status update posted by a caregiver about a user
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusUpdate {
    pub status_update_id: i64,
    pub caregiver_id: i64,
    pub update_time: String,
    pub status_message: String,
}

/// Status update repository
pub struct StatusUpdateRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StatusUpdateRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a status update, stamped with the current time.
    pub async fn create(
        &self,
        user_id: i64,
        caregiver_id: i64,
        status_message: &str,
    ) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO status_updates (user_id, caregiver_id, update_time, status_message)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(caregiver_id)
        .bind(now_timestamp())
        .bind(status_message)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// List status updates for one user.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<StatusUpdate>, DbError> {
        list_scoped(
            self.pool,
            "SELECT status_update_id, caregiver_id, update_time, status_message \
             FROM status_updates WHERE user_id = ? ORDER BY status_update_id",
            user_id,
        )
        .await
    }
}
