//! Medication endpoints

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::repos::{Medication, MedicationRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;

use super::StatusMessage;

/// Create medication request
#[derive(Deserialize)]
pub struct CreateMedicationRequest {
    pub user_id: i64,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    pub end_date: String,
}

/// GET /medications/{user_id} - list medications for a user
async fn list_medications(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Medication>>, ApiError> {
    let rows = MedicationRepo::new(state.pool())
        .list_for_user(user_id)
        .await?;
    Ok(Json(rows))
}

/// POST /medications - record a medication for a user
async fn create_medication(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateMedicationRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    MedicationRepo::new(state.pool())
        .create(
            req.user_id,
            &req.medication_name,
            &req.dosage,
            &req.frequency,
            &req.start_date,
            &req.end_date,
        )
        .await?;
    Ok(Json(StatusMessage::new("Medication added")))
}

/// Medication routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/medications", post(create_medication))
        .route("/medications/{user_id}", get(list_medications))
}
