//! HTTP error response conversion
//!
//! Wrapper type for AppError to implement IntoResponse; necessary because of
//! Rust's orphan rules (IntoResponse and AppError are both external to this
//! module's crate dependencies).
//!
//! The wire contract for failures is status-only: empty body, no headers.
//! Details land in the logs, at the level the error itself declares.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thumbcache_core::{AppError, LogLevel};

#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        HttpError(err)
    }
}

fn log_error(error: &AppError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code = code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, code = code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code = code, "Request failed");
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        log_error(&self.0);

        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_maps_to_403_with_empty_body() {
        let response = HttpError(AppError::Forbidden("size not allowed".into())).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_upstream_maps_to_500() {
        let response = HttpError(AppError::Upstream("s3 unreachable".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
