//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so it can be grepped in logs.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - API_xxx: HTTP surface errors
//! - CFG_xxx: Configuration errors
//! - UPSTREAM_xxx: Failures talking to the portfolio API from the client side
//! - FORM_xxx: Contact form errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError wrapping the underlying error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // API Errors
    // ============================================
    /// No route matched
    ApiNotFound,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,

    // ============================================
    // Upstream Errors (client side)
    // ============================================
    /// Could not reach the portfolio API
    UpstreamUnavailable,
    /// API answered with a non-success status
    UpstreamBadStatus,
    /// API body did not decode into the expected shape
    UpstreamInvalidBody,

    // ============================================
    // Contact Form Errors
    // ============================================
    /// Unknown form field name
    FormUnknownField,
    /// Required field missing or malformed
    FormInvalid,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiNotFound => "API_NOT_FOUND",

            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",

            Self::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            Self::UpstreamBadStatus => "UPSTREAM_BAD_STATUS",
            Self::UpstreamInvalidBody => "UPSTREAM_INVALID_BODY",

            Self::FormUnknownField => "FORM_UNKNOWN_FIELD",
            Self::FormInvalid => "FORM_INVALID",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiNotFound => 404,
            Self::FormUnknownField | Self::FormInvalid | Self::ConfigInvalidValue => 400,
            Self::UpstreamUnavailable | Self::UpstreamBadStatus | Self::UpstreamInvalidBody => 502,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// No route matched the request path
    pub fn not_found(path: &str) -> Self {
        Self::new(ErrorCode::ApiNotFound, format!("No route for {}", path))
    }

    /// Environment variable present but unparsable
    pub fn invalid_config(key: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("Invalid value for {}: {:?}", key, value),
        )
    }

    /// Contact form input name outside name/email/company/message
    pub fn unknown_field(name: &str) -> Self {
        Self::new(
            ErrorCode::FormUnknownField,
            format!("Unknown contact form field: {}", name),
        )
    }

    /// Required contact field empty or email malformed
    pub fn invalid_form(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::FormInvalid, msg)
    }
}

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

/// Classify client failures so the fallback log says why the fetch failed
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let code = if err.is_decode() {
            ErrorCode::UpstreamInvalidBody
        } else if err.is_status() {
            ErrorCode::UpstreamBadStatus
        } else {
            ErrorCode::UpstreamUnavailable
        };
        let message = err.to_string();
        Self::with_source(code, message, err)
    }
}

/// JSON body of error responses
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            code: self.code.as_str(),
            message: &self.message,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = AppError::not_found("/api/nope");
        assert_eq!(err.to_string(), "[API_NOT_FOUND] No route for /api/nope");
        assert_eq!(err.code_str(), "API_NOT_FOUND");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::ApiNotFound.http_status(), 404);
        assert_eq!(ErrorCode::FormInvalid.http_status(), 400);
        assert_eq!(ErrorCode::UpstreamUnavailable.http_status(), 502);
        assert_eq!(ErrorCode::ConfigInvalidValue.http_status(), 400);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_found("/api/x").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
