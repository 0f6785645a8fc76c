//! Sleep pattern repository

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{list_scoped, DbError};

/// Sleep pattern record; `duration` is minutes asleep.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SleepPattern {
    pub sleep_pattern_id: i64,
    pub sleep_start: String,
    pub sleep_end: String,
    pub duration: i64,
}

/// Sleep pattern repository
pub struct SleepPatternRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SleepPatternRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        sleep_start: &str,
        sleep_end: &str,
        duration: i64,
    ) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO sleep_patterns (user_id, sleep_start, sleep_end, duration)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(sleep_start)
        .bind(sleep_end)
        .bind(duration)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// List sleep patterns for one user.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<SleepPattern>, DbError> {
        list_scoped(
            self.pool,
            "SELECT sleep_pattern_id, sleep_start, sleep_end, duration \
             FROM sleep_patterns WHERE user_id = ? ORDER BY sleep_pattern_id",
            user_id,
        )
        .await
    }
}
