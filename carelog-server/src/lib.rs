//! carelog-server: HTTP backend for senior-care tracking
//!
//! Exposes CRUD endpoints for users, medications, sleep patterns,
//! caregiver status updates, and emergency alerts, persisted as rows
//! in a single SQLite file.

pub mod db;
pub mod http;

pub use http::error::ApiError;
pub use http::server::{build_router, run_server, AppState, ServerConfig};
