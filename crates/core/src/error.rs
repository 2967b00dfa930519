//! Core error types for waypost navigation.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for waypost operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Validation errors
    #[error("invalid route path '{path}': {reason}")]
    InvalidRoutePath { path: String, reason: String },

    #[error("navigation label cannot be empty")]
    EmptyLabel,

    #[error("unknown icon: {name}")]
    UnknownIcon { name: String },

    #[error("duplicate route path: {path}")]
    DuplicateRoute { path: String },

    // Configuration errors
    #[error("TOML parse error: {reason}")]
    ConfigParseFailed { reason: String },

    #[error("invalid log level '{level}'")]
    InvalidLogLevel { level: String },

    #[error("failed to install log subscriber: {reason}")]
    LoggingInitFailed { reason: String },

    // Browser errors
    #[error("browser window is not available")]
    WindowUnavailable,

    #[error("navigation to '{target}' failed: {reason}")]
    NavigationFailed { target: String, reason: String },
}

impl Error {
    /// Create an invalid route path error.
    pub fn invalid_route_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRoutePath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a navigation failure error.
    pub fn navigation_failed(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NavigationFailed {
            target: target.into(),
            reason: reason.into(),
        }
    }
}
