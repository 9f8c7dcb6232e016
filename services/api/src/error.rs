use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use vinipim_core::db::StoreError;
use vinipim_core::error::{ErrorCode, error_response};

/// API error variants. `Display` is the fixed message sent to clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("UNAUTHORIZED")]
    Unauthorized,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Not an admin")]
    NotAdmin,
    #[error("Admin access required")]
    AdminRequired,
    #[error("Post not found")]
    PostNotFound,
    #[error("Review not found")]
    ReviewNotFound,
    #[error("Media not found")]
    MediaNotFound,
    #[error("{0}")]
    InvalidInput(String),
    #[error("Database not available")]
    DatabaseUnavailable,
    #[error("Failed to update email")]
    EmailUpdateFailed,
    #[error("Failed to update password")]
    PasswordUpdateFailed,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => ErrorCode::Unauthorized,
            Self::NotAdmin | Self::AdminRequired => ErrorCode::Forbidden,
            Self::PostNotFound | Self::ReviewNotFound | Self::MediaNotFound => {
                ErrorCode::NotFound
            }
            Self::InvalidInput(_) => ErrorCode::BadRequest,
            Self::DatabaseUnavailable
            | Self::EmailUpdateFailed
            | Self::PasswordUpdateFailed
            | Self::Internal(_) => ErrorCode::InternalServerError,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable => Self::DatabaseUnavailable,
            StoreError::Query(e) => Self::Internal(e.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();
        // TraceLayer already records every status; only server faults carry
        // detail worth logging here.
        if code == ErrorCode::InternalServerError {
            match &self {
                Self::Internal(e) => tracing::error!(error = %e, "internal error"),
                other => tracing::error!(error = %other, "request failed"),
            }
        }
        error_response(code, &self.to_string())
    }
}
