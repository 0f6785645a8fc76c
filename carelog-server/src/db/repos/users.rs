//! User repository

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{now_timestamp, DbError};

/// User record as returned to clients.
///
/// `password_hash` is deliberately not part of this struct; it never
/// leaves the database layer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub date_created: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. `password_hash` must already be hashed; this layer
    /// never sees plaintext.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash, role, date_created)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(now_timestamp())
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// List all users.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT user_id, name, email, role, date_created FROM users ORDER BY user_id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(users)
    }
}
