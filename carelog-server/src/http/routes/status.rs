//! Caregiver status update endpoints

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::repos::{StatusUpdate, StatusUpdateRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;

use super::StatusMessage;

/// Create status update request
#[derive(Deserialize)]
pub struct CreateStatusUpdateRequest {
    pub user_id: i64,
    pub caregiver_id: i64,
    pub status_message: String,
}

/// GET /status/{user_id} - list status updates for a user
async fn list_status_updates(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<StatusUpdate>>, ApiError> {
    let rows = StatusUpdateRepo::new(state.pool())
        .list_for_user(user_id)
        .await?;
    Ok(Json(rows))
}

/// POST /status - record a status update for a user
async fn create_status_update(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateStatusUpdateRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    StatusUpdateRepo::new(state.pool())
        .create(req.user_id, req.caregiver_id, &req.status_message)
        .await?;
    Ok(Json(StatusMessage::new("Status update added")))
}

/// Status update routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", post(create_status_update))
        .route("/status/{user_id}", get(list_status_updates))
}
