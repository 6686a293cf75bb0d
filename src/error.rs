//! Error types and handling for Hestia
//!
//! This module defines the error types used throughout the application,
//! providing consistent error handling and reporting.

use thiserror::Error;

/// Result type alias for Hestia operations
pub type Result<T> = std::result::Result<T, HestiaError>;

/// Main error type for Hestia
#[derive(Debug, Error)]
pub enum HestiaError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The requested outage group does not exist in the feed
    #[error("Outage group not found: {group}")]
    GroupNotFound { group: String },

    /// The outage schedule could not be fetched or decoded
    #[error("Schedule unavailable: {message}")]
    ScheduleUnavailable { message: String },

    /// A printer command was rejected or failed on the device side
    #[error("Printer command failed: {message}")]
    CommandFailed { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Network-related errors
    #[error("Network error: {message}")]
    Network { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Timeout errors
    #[error("Timeout error: {message}")]
    Timeout { message: String },

    /// Generic errors with context
    #[error("Error: {message}")]
    Generic { message: String },
}

impl HestiaError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        HestiaError::Config {
            message: message.into(),
        }
    }

    /// Create a new group-not-found error
    pub fn group_not_found<S: Into<String>>(group: S) -> Self {
        HestiaError::GroupNotFound {
            group: group.into(),
        }
    }

    /// Create a new schedule-unavailable error
    pub fn schedule_unavailable<S: Into<String>>(message: S) -> Self {
        HestiaError::ScheduleUnavailable {
            message: message.into(),
        }
    }

    /// Create a new command-failed error
    pub fn command_failed<S: Into<String>>(message: S) -> Self {
        HestiaError::CommandFailed {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        HestiaError::Io {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        HestiaError::Network {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        HestiaError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        HestiaError::Timeout {
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        HestiaError::Generic {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for HestiaError {
    fn from(err: std::io::Error) -> Self {
        HestiaError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for HestiaError {
    fn from(err: serde_yaml::Error) -> Self {
        HestiaError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for HestiaError {
    fn from(err: serde_json::Error) -> Self {
        HestiaError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for HestiaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HestiaError::timeout(err.to_string())
        } else {
            HestiaError::network(err.to_string())
        }
    }
}

impl From<chrono::ParseError> for HestiaError {
    fn from(err: chrono::ParseError) -> Self {
        HestiaError::validation("datetime", &err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = HestiaError::config("test config error");
        assert!(matches!(err, HestiaError::Config { .. }));

        let err = HestiaError::group_not_found("1.1");
        assert!(matches!(err, HestiaError::GroupNotFound { .. }));

        let err = HestiaError::command_failed("PAUSE rejected");
        assert!(matches!(err, HestiaError::CommandFailed { .. }));

        let err = HestiaError::validation("field", "test validation error");
        assert!(matches!(err, HestiaError::Validation { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = HestiaError::config("test error");
        assert_eq!(format!("{}", err), "Configuration error: test error");

        let err = HestiaError::group_not_found("2.2");
        assert_eq!(format!("{}", err), "Outage group not found: 2.2");

        let err = HestiaError::validation("test_field", "invalid value");
        assert_eq!(
            format!("{}", err),
            "Validation error: test_field - invalid value"
        );
    }
}
