use axum::{Json, extract::State};
use serde::Serialize;
use tracing::debug;

use crate::domain::repository::Repositories;
use crate::domain::types::UploadUrlInput;
use crate::error::ApiError;
use crate::extract::{Input, Protected};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadUrlResponse {
    pub url: String,
}

// ── POST upload.getUploadUrl ──────────────────────────────────────────────────

pub async fn get_upload_url<R: Repositories>(
    State(state): State<AppState<R>>,
    Protected(principal): Protected,
    Input(input): Input<UploadUrlInput>,
) -> Result<Json<UploadUrlResponse>, ApiError> {
    let url = state
        .storage
        .upload_url(&input.filename)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("cannot build upload URL")))?;

    debug!(
        principal = %principal.id(),
        content_type = %input.content_type,
        "issued upload URL"
    );
    Ok(Json(UploadUrlResponse { url }))
}
