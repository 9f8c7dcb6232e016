pub mod admin;
pub mod auth;
pub mod health;
pub mod media;
pub mod oauth;
pub mod posts;
pub mod reviews;
pub mod system;
pub mod upload;

use axum::Json;
use serde::Serialize;

/// `{"success": true}`, the acknowledgement body of most mutations.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

pub(crate) fn success() -> Json<Success> {
    Json(Success { success: true })
}

/// `{"success": true, "id": ...}` for create mutations.
#[derive(Debug, Serialize)]
pub struct Created {
    pub success: bool,
    pub id: String,
}

pub(crate) fn created(id: String) -> Json<Created> {
    Json(Created { success: true, id })
}
