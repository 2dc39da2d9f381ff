//! SessionRegistry - one `DiagnosticSession` per identity.
//!
//! Each session sits behind its own `tokio::sync::Mutex`, so commands for one
//! user run one at a time while different users never wait on each other.
//! New sessions are loaded outside the registry lock, so a slow snapshot read
//! only delays its own user.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use super::autosave::AutoSaveConfig;
use super::session::DiagnosticSession;
use crate::domain::foundation::Identity;
use crate::domain::scoring::DEFAULT_RADIUS;
use crate::ports::{SnapshotSource, SubmissionGateway};

pub type SharedSession = Arc<Mutex<DiagnosticSession>>;

pub struct SessionRegistry {
    gateway: Arc<dyn SubmissionGateway>,
    snapshots: Option<Arc<dyn SnapshotSource>>,
    autosave: AutoSaveConfig,
    placement_radius: f64,
    sessions: RwLock<HashMap<String, SharedSession>>,
}

impl SessionRegistry {
    /// Registry whose new sessions resume from `snapshots` when given, and
    /// start fresh otherwise.
    pub fn new(
        gateway: Arc<dyn SubmissionGateway>,
        snapshots: Option<Arc<dyn SnapshotSource>>,
        autosave: AutoSaveConfig,
    ) -> Self {
        Self {
            gateway,
            snapshots,
            autosave,
            placement_radius: DEFAULT_RADIUS,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Radius of the placement disc for every session this registry creates.
    pub fn with_placement_radius(mut self, radius: f64) -> Self {
        self.placement_radius = radius;
        self
    }

    /// The identity's session, created on first use.
    ///
    /// When two first requests race, both load a session and the first one
    /// inserted wins.
    pub async fn session(&self, identity: &Identity) -> SharedSession {
        let key = identity.key();
        if let Some(session) = self.sessions.read().await.get(&key) {
            return Arc::clone(session);
        }

        let mut session = DiagnosticSession::new(
            identity.clone(),
            Arc::clone(&self.gateway),
            self.autosave.clone(),
        )
        .with_placement_radius(self.placement_radius);
        if let Some(snapshots) = &self.snapshots {
            session.restore_from(snapshots.as_ref()).await;
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(key)
                .or_insert_with(|| Arc::new(Mutex::new(session))),
        )
    }

    /// Logs the identity out and forgets its session.
    ///
    /// Returns false when the identity had no session.
    pub async fn logout(&self, identity: &Identity) -> bool {
        let removed = self.sessions.write().await.remove(&identity.key());
        match removed {
            Some(session) => {
                session.lock().await.logout();
                true
            }
            None => false,
        }
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}
