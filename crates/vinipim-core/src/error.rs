use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Wire-level error codes shared by every procedure.
///
/// Authorization failures (`Unauthorized`, `Forbidden`) are kept distinct from
/// business failures so clients can branch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Unauthorized,
    Forbidden,
    NotFound,
    BadRequest,
    InternalServerError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Render `{"code": ..., "message": ...}` with the status mapped from `code`.
pub fn error_response(code: ErrorCode, message: &str) -> Response {
    let body = serde_json::json!({
        "code": code.as_str(),
        "message": message,
    });
    (code.status(), axum::Json(body)).into_response()
}
