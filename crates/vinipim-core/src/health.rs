use axum::http::StatusCode;

/// Handler for `GET /healthz`. The process is up, regardless of the datastore.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Map a readiness probe result to the status served on `GET /readyz`.
pub fn readiness_status(ready: bool) -> StatusCode {
    if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
