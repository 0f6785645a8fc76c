//! Medication repository

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{list_scoped, DbError};

/// Medication record for a user
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Medication {
    pub medication_id: i64,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    pub end_date: String,
}

/// Medication repository
pub struct MedicationRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MedicationRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        medication_name: &str,
        dosage: &str,
        frequency: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO medications (user_id, medication_name, dosage, frequency, start_date, end_date)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(medication_name)
        .bind(dosage)
        .bind(frequency)
        .bind(start_date)
        .bind(end_date)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// List medications for one user.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Medication>, DbError> {
        list_scoped(
            self.pool,
            "SELECT medication_id, medication_name, dosage, frequency, start_date, end_date \
             FROM medications WHERE user_id = ? ORDER BY medication_id",
            user_id,
        )
        .await
    }
}
