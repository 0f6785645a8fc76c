//! User endpoints

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use carelog_core::auth;

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;

use super::StatusMessage;

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// GET /users - list all users
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// POST /users - create a user
///
/// The plaintext password is hashed before it reaches storage and is
/// never echoed back.
async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    let password_hash = auth::hash_password(&req.password)?;
    UserRepo::new(state.pool())
        .create(&req.name, &req.email, &password_hash, &req.role)
        .await?;
    Ok(Json(StatusMessage::new("User added")))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(list_users).post(create_user))
}
