use axum::{extract::State, http::StatusCode};

use vinipim_core::health::readiness_status;

use crate::domain::repository::Repositories;
use crate::state::AppState;

pub async fn root() -> &'static str {
    "Vinipim Portfolio API is running"
}

/// 503 while the datastore is unreachable.
pub async fn readyz<R: Repositories>(State(state): State<AppState<R>>) -> StatusCode {
    readiness_status(state.repos.ping().await)
}
