//! carelog-core: shared building blocks for the carelog service
//!
//! Holds the pieces that are useful outside the HTTP server itself:
//! configuration resolution and password hashing.

pub mod auth;
pub mod config;

pub use auth::{hash_password, verify_password, HashError};
pub use config::db_path;
