//! Error conversions
//!
//! HTTP rendering of [`AppError`] when the `axum` feature is on.

#[cfg(feature = "axum")]
use super::app_error::AppError;

/// Public message used for every 5xx response
pub const INTERNAL_MESSAGE: &str = "Internal server error";

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // 5xx bodies never carry anything but the generic message
        let message = if self.is_server_error() {
            INTERNAL_MESSAGE
        } else {
            self.message()
        };

        let body = serde_json::json!({ "message": message });

        (status, Json(body)).into_response()
    }
}
