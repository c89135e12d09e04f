//! Error types for Gradpath
//!
//! This module defines the error types used throughout the client,
//! using `thiserror` for ergonomic error handling.
//!
//! Every failed backend call surfaces as a single [`ApiError`], carrying the
//! HTTP status (when a response arrived), an optional machine-readable code
//! and the human-readable message the backend supplied.

use std::fmt;

use thiserror::Error;

/// A failed call to the counselling API.
///
/// `Display` renders only the message, so views can show it inline exactly
/// as the backend phrased it.
///
/// # Examples
///
/// ```
/// use gradpath::error::ApiError;
///
/// let err = ApiError::new(Some(401), None, "Incorrect email or password");
/// assert_eq!(err.to_string(), "Incorrect email or password");
/// assert!(err.is_unauthorized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code, `None` when no response was received
    pub status: Option<u16>,
    /// Backend-provided error code, when the error body has one
    pub code: Option<String>,
    /// Display message (`detail` from the body, or the status text)
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: Option<u16>, code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Creates an error for a request that never produced a response
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, None, message)
    }

    /// Returns `true` for HTTP 401
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    /// Returns `true` for HTTP 403
    pub fn is_forbidden(&self) -> bool {
        self.status == Some(403)
    }

    /// Returns `true` for HTTP 404
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Main error type for Gradpath operations
#[derive(Error, Debug)]
pub enum GradpathError {
    /// The backend rejected a request or could not be reached
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session lifecycle errors (e.g. a view requiring a logged-in user)
    #[error("Session error: {0}")]
    Session(String),

    /// Token storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Keyring/credential storage errors
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Result type alias for Gradpath operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

/// Returns the [`ApiError`] inside an `anyhow::Error`, if there is one.
///
/// # Examples
///
/// ```
/// use gradpath::error::{api_error, ApiError, GradpathError};
///
/// let err: anyhow::Error = GradpathError::Api(ApiError::new(Some(404), None, "Not found")).into();
/// assert_eq!(api_error(&err).and_then(|e| e.status), Some(404));
/// ```
pub fn api_error(err: &anyhow::Error) -> Option<&ApiError> {
    match err.downcast_ref::<GradpathError>() {
        Some(GradpathError::Api(api)) => Some(api),
        _ => err.downcast_ref::<ApiError>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_is_bare_message() {
        let error = ApiError::new(Some(400), None, "Email already registered");
        assert_eq!(error.to_string(), "Email already registered");
    }

    #[test]
    fn test_api_error_wrapped_display_is_transparent() {
        let error = GradpathError::Api(ApiError::new(Some(403), None, "Lock first"));
        assert_eq!(error.to_string(), "Lock first");
    }

    #[test]
    fn test_api_error_status_predicates() {
        assert!(ApiError::new(Some(401), None, "x").is_unauthorized());
        assert!(ApiError::new(Some(403), None, "x").is_forbidden());
        assert!(ApiError::new(Some(404), None, "x").is_not_found());
        assert!(!ApiError::transport("refused").is_unauthorized());
    }

    #[test]
    fn test_api_error_downcast_through_anyhow() {
        let err: anyhow::Error =
            GradpathError::Api(ApiError::new(Some(500), Some("db".into()), "boom")).into();
        let api = api_error(&err).expect("api error");
        assert_eq!(api.code.as_deref(), Some("db"));
    }

    #[test]
    fn test_api_error_downcast_bare() {
        let err: anyhow::Error = ApiError::transport("connection refused").into();
        assert_eq!(api_error(&err).map(|e| e.status), Some(None));
    }

    #[test]
    fn test_api_error_downcast_other_error_is_none() {
        let err: anyhow::Error = GradpathError::Config("bad".into()).into();
        assert!(api_error(&err).is_none());
    }

    #[test]
    fn test_config_error_display() {
        let error = GradpathError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_session_error_display() {
        let error = GradpathError::Session("not logged in".to_string());
        assert_eq!(error.to_string(), "Session error: not logged in");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: GradpathError = io_error.into();
        assert!(matches!(error, GradpathError::Io(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: GradpathError = yaml_error.into();
        assert!(matches!(error, GradpathError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GradpathError>();
    }
}
