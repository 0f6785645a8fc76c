//! Device check-in endpoint
//!
//! Accepts a typed payload and acknowledges it by echoing it back.
//! Unknown shapes and mistyped fields are rejected at the boundary
//! rather than being accepted as an open key-value map.

use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;

/// Device check-in payload
#[derive(Debug, Deserialize, Serialize)]
pub struct CheckInPayload {
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Acknowledgement wrapping the payload as received
#[derive(Serialize)]
pub struct DataReceived {
    pub received: CheckInPayload,
}

/// POST /data - acknowledge a device check-in
async fn receive_data(
    JsonBody(payload): JsonBody<CheckInPayload>,
) -> Result<Json<DataReceived>, ApiError> {
    Ok(Json(DataReceived { received: payload }))
}

/// Data routes
pub fn router() -> Router<AppState> {
    Router::new().route("/data", post(receive_data))
}
