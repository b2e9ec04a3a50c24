//! API error types for wl-web.
//!
//! This module provides structured error handling with proper HTTP status
//! code mapping. Reads degrade gracefully (hooks turn these into an error
//! string next to stale data); writes return them loudly so the calling
//! screen can keep its modal open and show what happened.

#[cfg(feature = "server")]
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wl_types::auth::PayloadError;

/// API errors with semantic HTTP status code mapping.
///
/// In debug builds, internal error details are exposed for easier debugging.
/// In release builds, internal errors return a generic message and log the
/// details server-side.
#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum ApiError {
    /// 400 Bad Request - Validation failed
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// 401 Unauthorized - Authentication required
    #[error("unauthorized")]
    Unauthorized,

    /// 403 Forbidden - Insufficient permissions
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    /// 404 Not Found - Resource doesn't exist
    #[error("not found: {message}")]
    NotFound { message: String },

    /// 504 Gateway Timeout - The upstream marketplace service did not answer
    /// in time. Distinct from other network failures so the UI never leaves
    /// a spinner hanging on a slow upstream.
    #[error("the marketplace service took too long to respond")]
    Timeout,

    /// 502 Bad Gateway - The upstream marketplace service failed or was
    /// unreachable.
    #[error("marketplace service error: {message}")]
    Upstream { message: String },

    /// 502 Bad Gateway - The upstream answered with a shape we cannot trust
    /// (missing identity fields, unparseable JSON). Distinct from rejected
    /// credentials.
    #[error("unexpected response from the marketplace service: {message}")]
    Contract { message: String },

    /// 500 Internal Server Error - Unexpected error
    #[error("{}", internal_display_message(.message))]
    Internal { message: String },
}

/// Returns the display message for internal errors based on build mode.
fn internal_display_message(msg: &str) -> String {
    if cfg!(debug_assertions) {
        format!("internal error: {}", msg)
    } else {
        "an internal error occurred".to_string()
    }
}

impl ApiError {
    /// Create an internal error, logging in release mode.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        if !cfg!(debug_assertions) {
            tracing::error!(error = %message, "internal api error");
        }
        Self::Internal { message }
    }

    /// Convenience constructor for validation errors.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// Convenience constructor for forbidden errors.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden { message: message.into() }
    }

    /// Convenience constructor for not found errors.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    /// Convenience constructor for upstream failures.
    pub fn upstream(err: impl std::fmt::Display) -> Self {
        Self::Upstream { message: err.to_string() }
    }

    /// Convenience constructor for upstream contract violations.
    pub fn contract(err: impl std::fmt::Display) -> Self {
        Self::Contract { message: err.to_string() }
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use dioxus::fullstack::AsStatusCode as _;
        let status = self.as_status_code();
        (status, self.to_string()).into_response()
    }
}

// ============================================================================
// From implementations for error conversion
// ============================================================================

/// A malformed identity payload is an upstream contract violation.
impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        ApiError::contract(err)
    }
}

/// Conversion from ApiError to Dioxus ServerFnError for server function compatibility.
impl From<ApiError> for dioxus::prelude::ServerFnError {
    fn from(err: ApiError) -> Self {
        dioxus::prelude::ServerFnError::new(err.to_string())
    }
}

/// Conversion from Dioxus ServerFnError to ApiError.
/// This is required when using `?` on Dioxus internal operations within a handler returning `Result<T, ApiError>`.
impl From<dioxus::prelude::ServerFnError> for ApiError {
    fn from(err: dioxus::prelude::ServerFnError) -> Self {
        ApiError::internal(err)
    }
}

#[cfg(feature = "server")]
impl dioxus::fullstack::AsStatusCode for ApiError {
    fn as_status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream { .. } | Self::Contract { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
