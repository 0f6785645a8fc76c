//! Route handlers organized by resource

use serde::Serialize;

pub mod alerts;
pub mod data;
pub mod health;
pub mod medications;
pub mod sleep;
pub mod status;
pub mod users;

/// Confirmation body returned by create endpoints.
#[derive(Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
}

impl StatusMessage {
    pub fn new(status: &'static str) -> Self {
        Self { status }
    }
}
