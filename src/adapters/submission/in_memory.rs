//! In-Memory Submission Store
//!
//! Keeps every submission in memory. Useful for tests and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dashboard::Submission;
use crate::domain::foundation::{Identity, ModuleId};
use crate::ports::{GatewayError, SnapshotSource, SubmissionGateway};

/// In-memory store for module submissions
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionStore {
    latest: Arc<RwLock<HashMap<(String, ModuleId), Submission>>>,
    history: Arc<RwLock<Vec<Submission>>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every submission received, oldest first
    pub async fn history(&self) -> Vec<Submission> {
        self.history.read().await.clone()
    }

    /// Latest submission of one module
    pub async fn get(&self, identity: &Identity, module: ModuleId) -> Option<Submission> {
        self.latest
            .read()
            .await
            .get(&(identity.key(), module))
            .cloned()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.latest.write().await.clear();
        self.history.write().await.clear();
    }
}

#[async_trait]
impl SubmissionGateway for InMemorySubmissionStore {
    async fn submit(&self, submission: &Submission) -> Result<(), GatewayError> {
        let key = (submission.identity.key(), submission.module);
        self.latest.write().await.insert(key, submission.clone());
        self.history.write().await.push(submission.clone());
        Ok(())
    }
}

#[async_trait]
impl SnapshotSource for InMemorySubmissionStore {
    async fn latest(&self, identity: &Identity) -> Result<Vec<Submission>, GatewayError> {
        let latest = self.latest.read().await;
        let key = identity.key();
        Ok(ModuleId::ORDER
            .iter()
            .filter_map(|module| latest.get(&(key.clone(), *module)).cloned())
            .collect())
    }
}
