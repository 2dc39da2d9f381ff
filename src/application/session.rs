//! DiagnosticSession - one user's dashboard wired to autosave.
//!
//! The dashboard itself is pure and synchronous. This type adds the side
//! effects around it: a debounced save after every applied edit, a flush when
//! a module is submitted for review, and cancellation on exit and logout.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::autosave::{AutoSaveConfig, AutoSavePipeline, SaveIndicator};
use crate::domain::answers::ModuleAnswers;
use crate::domain::dashboard::{Dashboard, Route};
use crate::domain::foundation::{DomainError, Identity, ModuleId};
use crate::domain::wizard::{EditOutcome, ModuleWizard};
use crate::ports::{SnapshotSource, SubmissionGateway};

pub struct DiagnosticSession {
    dashboard: Dashboard,
    pipelines: [AutoSavePipeline; 4],
}

impl DiagnosticSession {
    /// Fresh session with every module in its initial state.
    pub fn new(
        identity: Identity,
        gateway: Arc<dyn SubmissionGateway>,
        config: AutoSaveConfig,
    ) -> Self {
        let pipelines =
            ModuleId::ORDER.map(|_| AutoSavePipeline::new(Arc::clone(&gateway), config.clone()));
        Self {
            dashboard: Dashboard::new(identity),
            pipelines,
        }
    }

    /// Keeps every stored placement inside the disc of `radius`.
    pub fn with_placement_radius(mut self, radius: f64) -> Self {
        self.dashboard.set_placement_radius(radius);
        self
    }

    /// Session rebuilt from the latest persisted submissions.
    pub async fn resume(
        identity: Identity,
        gateway: Arc<dyn SubmissionGateway>,
        snapshots: &dyn SnapshotSource,
        config: AutoSaveConfig,
    ) -> Self {
        let mut session = Self::new(identity, gateway, config);
        session.restore_from(snapshots).await;
        session
    }

    /// Loads the latest persisted submissions into this session.
    ///
    /// A snapshot source that cannot be read leaves the dashboard as it is.
    pub async fn restore_from(&mut self, snapshots: &dyn SnapshotSource) {
        let submissions = match snapshots.latest(self.dashboard.identity()).await {
            Ok(submissions) => submissions,
            Err(e) => {
                warn!(
                    email = %self.dashboard.identity().email(),
                    error = %e,
                    "Could not load saved answers, starting fresh"
                );
                Vec::new()
            }
        };

        for submission in submissions {
            let module = submission.module;
            if submission.answers.module() != module {
                warn!(%module, "Ignoring submission whose answers belong to another module");
                continue;
            }
            let started = submission.started();
            self.dashboard.restore_module(ModuleWizard::restore(
                submission.answers,
                submission.status,
                started,
            ));
            let current = self.dashboard.submission(module);
            self.pipeline_mut(module).prime(&current);
        }

        debug!(
            email = %self.dashboard.identity().email(),
            "Diagnostic session resumed"
        );
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn save_indicator(&self, module: ModuleId) -> SaveIndicator {
        self.pipeline(module).indicator()
    }

    pub fn subscribe(&self, module: ModuleId) -> tokio::sync::watch::Receiver<SaveIndicator> {
        self.pipeline(module).subscribe()
    }

    fn pipeline(&self, module: ModuleId) -> &AutoSavePipeline {
        &self.pipelines[module.order_index()]
    }

    fn pipeline_mut(&mut self, module: ModuleId) -> &mut AutoSavePipeline {
        &mut self.pipelines[module.order_index()]
    }

    // ───────────────────────────────────────────────────────────────
    // Routing
    // ───────────────────────────────────────────────────────────────

    pub fn route_entry(&mut self, module: ModuleId) -> Route {
        let route = self.dashboard.route_entry(module);
        debug!(%module, ?route, "Entry routed");
        route
    }

    pub fn open_module(&mut self, module: ModuleId) -> Result<Route, DomainError> {
        let route = self.dashboard.open_module(module)?;
        debug!(%module, ?route, "Module opened");
        Ok(route)
    }

    /// Leaves the active module, dropping its pending save.
    pub fn exit_module(&mut self) -> Option<ModuleId> {
        let left = self.dashboard.exit_module();
        if let Some(module) = left {
            self.pipeline_mut(module).cancel();
            debug!(%module, "Module closed");
        }
        left
    }

    // ───────────────────────────────────────────────────────────────
    // Wizard commands
    // ───────────────────────────────────────────────────────────────

    pub fn replace_answers(
        &mut self,
        module: ModuleId,
        answers: ModuleAnswers,
    ) -> Result<EditOutcome, DomainError> {
        let outcome = self.dashboard.replace_answers(module, answers)?;
        if outcome.is_applied() {
            let submission = self.dashboard.submission(module);
            self.pipeline_mut(module).observe(submission);
        }
        Ok(outcome)
    }

    pub fn advance(&mut self, module: ModuleId) -> Result<usize, DomainError> {
        let step = self.dashboard.advance(module)?;
        debug!(%module, step, "Advanced");
        Ok(step)
    }

    pub fn back(&mut self, module: ModuleId) -> Result<usize, DomainError> {
        let step = self.dashboard.back(module)?;
        debug!(%module, step, "Went back");
        Ok(step)
    }

    /// Sends the module for review, persists it at once and returns to the
    /// overview.
    pub async fn submit_for_review(&mut self, module: ModuleId) -> Result<(), DomainError> {
        self.dashboard.submit_for_review(module)?;
        info!(
            %module,
            email = %self.dashboard.identity().email(),
            "Module submitted for review"
        );

        let submission = self.dashboard.submission(module);
        self.pipeline_mut(module).flush(submission).await;
        Ok(())
    }

    /// Admin decision closing a review; persisted at once.
    pub async fn mark_completed(&mut self, module: ModuleId) -> Result<(), DomainError> {
        self.dashboard.mark_completed(module)?;
        info!(
            %module,
            email = %self.dashboard.identity().email(),
            "Module marked completed"
        );

        let submission = self.dashboard.submission(module);
        self.pipeline_mut(module).flush(submission).await;
        Ok(())
    }

    /// Drops every pending save and resets all modules.
    pub fn logout(&mut self) {
        for pipeline in &mut self.pipelines {
            pipeline.reset();
        }
        self.dashboard.logout();
        info!(email = %self.dashboard.identity().email(), "Logged out");
    }
}
