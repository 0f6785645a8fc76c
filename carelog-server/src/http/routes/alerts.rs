//! Emergency alert endpoints

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::repos::{AlertRepo, EmergencyAlert};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;

use super::StatusMessage;

/// Create alert request
#[derive(Deserialize)]
pub struct CreateAlertRequest {
    pub message: String,
}

/// GET /alerts - list all emergency alerts
async fn list_alerts(State(state): State<AppState>) -> Result<Json<Vec<EmergencyAlert>>, ApiError> {
    let alerts = AlertRepo::new(state.pool()).list().await?;
    Ok(Json(alerts))
}

/// POST /alerts - raise an emergency alert
async fn create_alert(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateAlertRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    AlertRepo::new(state.pool()).create(&req.message).await?;
    Ok(Json(StatusMessage::new("Emergency alert added")))
}

/// Alert routes
pub fn router() -> Router<AppState> {
    Router::new().route("/alerts", get(list_alerts).post(create_alert))
}
