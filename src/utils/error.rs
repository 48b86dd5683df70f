//! Error handling module
//!
//! Defines error types and handling logic used in the project

use crate::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Remote service rejected the credentials
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Request validation failed
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// External API error
    #[error("External API error: {0}")]
    ExternalApi(String),

    /// Remote service answered with an unexpected payload
    #[error("Unexpected response from remote service: {0}")]
    MalformedResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, please try again later")]
    RateLimit,

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Azure Cognitive Services error envelope
///
/// Translator uses numeric codes, Vision uses string codes.
#[derive(Debug, Serialize, Deserialize)]
pub struct AzureErrorResponse {
    pub error: AzureError,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AzureError {
    #[serde(default)]
    pub code: serde_json::Value,
    pub message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateLimit => StatusCode::TOO_MANY_REQUESTS,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Authentication(_)
            | AppError::ExternalApi(_)
            | AppError::MalformedResponse(_)
            | AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Serialization(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Config(_) => "configuration_error",
            AppError::Authentication(_) => "authentication_error",
            AppError::Validation(_) => "invalid_request_error",
            AppError::NotFound(_) => "not_found_error",
            AppError::RateLimit => "rate_limit_error",
            AppError::Timeout => "timeout_error",
            AppError::MalformedResponse(_) | AppError::Serialization(_) => "malformed_response_error",
            AppError::ExternalApi(_) | AppError::HttpClient(_) => "api_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Whether detailed error information should be logged
    pub fn should_log_details(&self) -> bool {
        !matches!(self, AppError::Authentication(_) | AppError::NotFound(_))
    }

    /// Classify a non-success response from a remote service
    ///
    /// The Azure error envelope message is preferred over the raw body.
    pub fn from_upstream(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<AzureErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    status.to_string()
                } else {
                    format!("{} - {}", status, body.trim())
                }
            });

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Authentication(message),
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimit,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => AppError::Timeout,
            _ => AppError::ExternalApi(message),
        }
    }

    /// Classify a remote response by its raw status code
    ///
    /// The HTTP client and the server use different `http` crate versions.
    pub fn from_upstream_code(code: u16, body: &str) -> Self {
        match StatusCode::from_u16(code) {
            Ok(status) => Self::from_upstream(status, body),
            Err(_) => AppError::ExternalApi(format!("invalid status code {} - {}", code, body.trim())),
        }
    }

    /// Convert a transport error, keeping timeouts distinct
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else {
            AppError::HttpClient(err)
        }
    }
}

/// Render errors that escape a handler as an HTML error page
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.should_log_details() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self.error_type(), status);
        }

        (status, Html(views::render_error_page(status, &self.to_string()))).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create validation error
    pub fn validation_error(message: impl Into<String>) -> AppError {
        AppError::Validation(message.into())
    }

    /// Create configuration error for a missing setting
    pub fn missing_setting(name: &str) -> AppError {
        AppError::Config(anyhow::anyhow!("{} is not set", name))
    }

    /// Create configuration error for an endpoint that is not an http(s) URL
    pub fn invalid_endpoint(name: &str, value: &str) -> AppError {
        AppError::Config(anyhow::anyhow!(
            "{} should start with 'http': {}",
            name,
            value
        ))
    }

    /// Create malformed response error
    pub fn malformed_response(message: impl Into<String>) -> AppError {
        AppError::MalformedResponse(message.into())
    }
}
