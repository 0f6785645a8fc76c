//! Emergency alert repository

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{now_timestamp, DbError};

/// Emergency alert record
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmergencyAlert {
    pub id: i64,
    pub message: String,
    pub timestamp: String,
}

/// Emergency alert repository
pub struct AlertRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AlertRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an alert, stamped with the current time.
    pub async fn create(&self, message: &str) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO emergency_alerts (message, timestamp) VALUES (?, ?)",
        )
        .bind(message)
        .bind(now_timestamp())
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// List all alerts.
    pub async fn list(&self) -> Result<Vec<EmergencyAlert>, DbError> {
        let alerts = sqlx::query_as::<_, EmergencyAlert>(
            "SELECT id, message, timestamp FROM emergency_alerts ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn alert_is_timestamped() {
        let pool = db::memory_pool().await;
        let repo = AlertRepo::new(&pool);

        repo.create("fall detected in room 4").await.unwrap();

        let alerts = repo.list().await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "fall detected in room 4");
        assert!(!alerts[0].timestamp.is_empty());
    }
}
