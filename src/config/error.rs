//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Autosave quiet period must be between 100 and 60000 ms")]
    InvalidQuietPeriod,

    #[error("Saved indicator display must be at most 60000 ms")]
    InvalidSavedDisplay,

    #[error("Scoring radius must be a positive number no larger than 50")]
    InvalidRadius,

    #[error("Drag threshold must be a non-negative number")]
    InvalidDragThreshold,

    #[error("Submit URL must use http or https")]
    InvalidSubmitUrl,

    #[error("Submit URL must use HTTPS in production")]
    SubmitUrlMustBeHttps,
}
