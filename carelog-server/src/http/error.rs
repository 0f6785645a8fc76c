//! API error types with IntoResponse
//!
//! Errors are converted to JSON `{"error": ...}` responses with the
//! appropriate status code: 400 for malformed input, 500 for storage
//! failures. Storage errors surface the driver message and are logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use carelog_core::auth::HashError;

use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request body or parameters (400)
    #[error("{0}")]
    BadRequest(String),

    /// Storage failure (500)
    #[error("{0}")]
    Database(#[from] DbError),

    /// Password hashing failure (500)
    #[error("{0}")]
    Hash(#[from] HashError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(e) => {
                tracing::error!("database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Hash(e) => {
                tracing::error!("password hashing error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn bad_request_is_400() {
        let err = ApiError::BadRequest("missing field `name`".into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_error_is_500_with_error_body() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn bad_request_message_is_surfaced_verbatim() {
        let err = ApiError::BadRequest("expected value at line 1".into());
        let response = err.into_response();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "expected value at line 1");
    }
}
