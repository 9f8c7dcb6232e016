use axum::{Json, response::IntoResponse};
use serde_json::json;
use tracing::info;

use crate::domain::types::{HealthInput, NotifyOwnerInput};
use crate::error::ApiError;
use crate::extract::{AdminOnly, Input, QueryInput};
use crate::handlers::success;

/// `{"ok": true}` for any non-negative client timestamp.
pub async fn health(
    QueryInput(input): QueryInput<HealthInput>,
) -> Result<impl IntoResponse, ApiError> {
    input.validate()?;
    Ok(Json(json!({ "ok": true })))
}

pub async fn notify_owner(
    AdminOnly(principal): AdminOnly,
    Input(input): Input<NotifyOwnerInput>,
) -> Result<impl IntoResponse, ApiError> {
    input.validate()?;
    info!(
        from = %principal.id(),
        title = %input.title,
        content = %input.content,
        "owner notification"
    );
    Ok(success())
}
