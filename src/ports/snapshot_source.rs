//! SnapshotSource port - latest persisted state for a returning user.

use async_trait::async_trait;

use super::GatewayError;
use crate::domain::dashboard::Submission;
use crate::domain::foundation::Identity;

/// Reads back what a `SubmissionGateway` stored.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Latest submission of every module the identity has persisted.
    ///
    /// Modules that were never persisted are absent from the result.
    async fn latest(&self, identity: &Identity) -> Result<Vec<Submission>, GatewayError>;
}
