//! Sleep pattern endpoints

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::repos::{SleepPattern, SleepPatternRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;

use super::StatusMessage;

/// Create sleep pattern request; `duration` is minutes asleep.
#[derive(Deserialize)]
pub struct CreateSleepPatternRequest {
    pub user_id: i64,
    pub sleep_start: String,
    pub sleep_end: String,
    pub duration: i64,
}

/// GET /sleep/{user_id} - list sleep patterns for a user
async fn list_sleep_patterns(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<SleepPattern>>, ApiError> {
    let rows = SleepPatternRepo::new(state.pool())
        .list_for_user(user_id)
        .await?;
    Ok(Json(rows))
}

/// POST /sleep - record a sleep pattern for a user
async fn create_sleep_pattern(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateSleepPatternRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    SleepPatternRepo::new(state.pool())
        .create(req.user_id, &req.sleep_start, &req.sleep_end, req.duration)
        .await?;
    Ok(Json(StatusMessage::new("Sleep pattern added")))
}

/// Sleep pattern routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sleep", post(create_sleep_pattern))
        .route("/sleep/{user_id}", get(list_sleep_patterns))
}
