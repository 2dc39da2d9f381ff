//! SubmissionGateway port - where module submissions are persisted.
//!
//! The autosave pipeline calls `submit` with the full current state of a
//! module after each quiet period and once more when the module is sent for
//! review. Failures are reported to the caller, which logs and drops them.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::dashboard::Submission;

/// Port for persisting module submissions.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Persists the full state of one module for one identity.
    ///
    /// A later submission for the same identity and module supersedes the
    /// earlier one.
    async fn submit(&self, submission: &Submission) -> Result<(), GatewayError>;
}

/// Errors that can occur while persisting a submission.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The remote endpoint could not be reached or timed out.
    #[error("Persistence endpoint unreachable: {message}")]
    Unreachable { message: String },

    /// The remote endpoint answered with a non-success status.
    #[error("Persistence endpoint rejected submission with status {status}")]
    Rejected { status: u16 },

    /// The submission could not be encoded or a stored one decoded.
    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    /// Local storage failed.
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl GatewayError {
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        GatewayError::storage(err.to_string())
    }
}
