//! News Error Types
//!
//! News-specific error variants rendered through `kernel::error::AppError`.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::INTERNAL_MESSAGE, kind::ErrorKind};
use thiserror::Error;

/// News-specific result type alias
pub type NewsResult<T> = Result<T, NewsError>;

#[derive(Debug, Error)]
pub enum NewsError {
    /// User has no stored preferences (or no longer exists)
    #[error("User preferences not found")]
    PreferencesNotFound,

    /// Headlines provider unreachable or answered with an error
    #[error("Headlines provider error: {0}")]
    Upstream(String),

    /// User lookup failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl NewsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NewsError::PreferencesNotFound => ErrorKind::BadRequest,
            NewsError::Upstream(_) => ErrorKind::InternalServerError,
            NewsError::Auth(e) => e.kind(),
        }
    }

    /// Message rendered to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            NewsError::PreferencesNotFound => "User preferences not found",
            NewsError::Upstream(_) => INTERNAL_MESSAGE,
            NewsError::Auth(e) => e.public_message(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    fn log(&self) {
        match self {
            NewsError::Upstream(msg) => {
                tracing::error!(message = %msg, "Headlines provider failed");
            }
            NewsError::Auth(e) if e.kind().is_server_error() => {
                tracing::error!(error = %e, "User lookup failed");
            }
            _ => {
                tracing::debug!(error = %self, "News error");
            }
        }
    }
}

impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<reqwest::Error> for NewsError {
    fn from(err: reqwest::Error) -> Self {
        NewsError::Upstream(err.to_string())
    }
}
