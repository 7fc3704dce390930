use axum::{http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
///
/// Covers every failure the gateway can surface, providing structured
/// information for logging and user-facing responses. Upstream failures
/// carry a fixed public message chosen at the call site; the underlying
/// cause only reaches the structured log.
#[derive(Error, Debug)]
pub enum AppError {
    // ===== HTTP & Network Errors =====
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{public}: {detail}")]
    UpstreamRead { public: String, detail: String },

    #[error("{public}: {detail}")]
    UpstreamWrite { public: String, detail: String },

    // ===== Serialization Errors =====
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ===== Authentication Errors =====
    #[error("Authentication error: {0}")]
    Auth(String),

    // ===== Validation Errors =====
    #[error("Validation error: {0}")]
    Validation(String),

    // ===== Configuration Errors =====
    #[error("Configuration error: {0}")]
    Config(String),

    // ===== Internal Server Errors =====
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) | AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamRead { .. }
            | AppError::UpstreamWrite { .. }
            | AppError::Reqwest(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message (without upstream detail)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Auth(msg) => format!("Authentication failed: {}", msg),
            AppError::Validation(msg) => msg.clone(),
            AppError::Json(_) => "Invalid request body".to_string(),
            AppError::UpstreamRead { public, .. } | AppError::UpstreamWrite { public, .. } => {
                public.clone()
            }
            AppError::Reqwest(_) => "Upstream request failed".to_string(),
            AppError::Config(msg) => format!("Configuration error: {}", msg),
            // The feedback path relies on this echoing the underlying message.
            AppError::Internal(msg) => msg.clone(),
        }
    }

    /// Get error code for programmatic error handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "AUTH_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::UpstreamRead { .. } => "UPSTREAM_READ_FAILED",
            AppError::UpstreamWrite { .. } => "UPSTREAM_WRITE_FAILED",
            AppError::Reqwest(_) => "HTTP_CLIENT_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Log this error with appropriate level and context
    pub fn log(&self) {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(
                error = %self,
                error_code = %code,
                status = %status.as_u16(),
                "Server error occurred"
            );
        } else if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(
                error = %self,
                error_code = %code,
                "Authentication failed"
            );
        } else {
            tracing::debug!(
                error = %self,
                error_code = %code,
                "Client error occurred"
            );
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Log the error with appropriate level
        self.log();

        let status = self.status_code();
        let response_body = json!({
            "error": self.user_message(),
            "error_code": self.error_code(),
            "status": status.as_u16(),
        });

        (status, axum::Json(response_body)).into_response()
    }
}

// ============================================================================
// Helper functions for creating common errors
// ============================================================================

impl AppError {
    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        AppError::Auth(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Create an internal server error
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Create an upstream read failure with a fixed public message
    pub fn upstream_read(public: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::UpstreamRead {
            public: public.into(),
            detail: detail.into(),
        }
    }

    /// Create an upstream write failure with a fixed public message
    pub fn upstream_write(public: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::UpstreamWrite {
            public: public.into(),
            detail: detail.into(),
        }
    }
}
