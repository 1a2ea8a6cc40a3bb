//! Error types module
//!
//! One explicit error taxonomy for the whole service. Every failure that can
//! reach a client maps to a variant here, so the transport adapter can pick
//! the right status code instead of guessing from an absent result.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code to return for this error
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::Forbidden(_) => 403,
            AppError::NotFound(_) => 404,
            AppError::Upstream(_) => 500,
            AppError::Internal(_) => 500,
        }
    }

    /// Machine-readable error code (e.g., "UPSTREAM_ERROR")
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Log level for this error. Client errors are expected and stay at debug.
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::BadRequest(_) | AppError::Forbidden(_) => LogLevel::Debug,
            AppError::NotFound(_) => LogLevel::Warn,
            AppError::Upstream(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_match_taxonomy() {
        assert_eq!(AppError::BadRequest("x".into()).http_status_code(), 400);
        assert_eq!(AppError::Forbidden("x".into()).http_status_code(), 403);
        assert_eq!(AppError::NotFound("x".into()).http_status_code(), 404);
        assert_eq!(AppError::Upstream("x".into()).http_status_code(), 500);
        assert_eq!(AppError::Internal("x".into()).http_status_code(), 500);
    }

    #[test]
    fn test_client_errors_log_at_debug() {
        assert_eq!(
            AppError::Forbidden("size not allowed".into()).log_level(),
            LogLevel::Debug
        );
        assert_eq!(
            AppError::Upstream("s3 timeout".into()).log_level(),
            LogLevel::Error
        );
    }
}
