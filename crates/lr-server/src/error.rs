//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`lr_core::Error`] so that route handlers
//! can return `Result<T, AppError>` directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: lr_core::Error,
}

impl AppError {
    pub fn new(inner: lr_core::Error) -> Self {
        Self { inner }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<lr_core::Error> for AppError {
    fn from(e: lr_core::Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in request handler"
            );
        } else {
            tracing::info!(status = %status, error = %self.inner, "Request failed");
        }

        let code = match &self.inner {
            lr_core::Error::NotFound { .. } => "not_found",
            lr_core::Error::Forbidden(_) => "forbidden",
            lr_core::Error::Validation(_) => "validation_error",
            lr_core::Error::Io { .. } => "io_error",
            lr_core::Error::Internal(_) => "internal_error",
        };

        let body = json!({
            "error": self.inner.to_string(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
