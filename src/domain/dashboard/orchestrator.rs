//! Dashboard - one user's four modules and which of them is open.
//!
//! Only one module is active at a time. Every wizard command names the module
//! it targets and is rejected unless that module is the active one, so a stale
//! client can never edit a module the user already left.

use serde::{Deserialize, Serialize};

use super::overview::{DashboardOverview, ModuleCard, ModuleView};
use super::submission::{ProgressFlags, Submission};
use crate::domain::answers::ModuleAnswers;
use crate::domain::foundation::{DomainError, ErrorCode, Identity, ModuleId, Timestamp};
use crate::domain::scoring::DEFAULT_RADIUS;
use crate::domain::wizard::{EditOutcome, ModuleWizard};

/// Where the user currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Route {
    Overview,
    Module { module: ModuleId, step: usize },
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    identity: Identity,
    modules: [ModuleWizard; 4],
    active: Option<ModuleId>,
    placement_radius: f64,
}

impl Dashboard {
    /// All four modules in their initial state, overview shown.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            modules: ModuleId::ORDER.map(ModuleWizard::new),
            active: None,
            placement_radius: DEFAULT_RADIUS,
        }
    }

    /// Radius of the placement disc for every module, now and after logout.
    pub fn set_placement_radius(&mut self, radius: f64) {
        self.placement_radius = radius;
        for wizard in &mut self.modules {
            wizard.set_placement_radius(radius);
        }
    }

    /// Replaces one module's state with a restored one.
    pub fn restore_module(&mut self, mut wizard: ModuleWizard) {
        wizard.set_placement_radius(self.placement_radius);
        let index = wizard.module().order_index();
        self.modules[index] = wizard;
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn module(&self, module: ModuleId) -> &ModuleWizard {
        &self.modules[module.order_index()]
    }

    pub fn active(&self) -> Option<ModuleId> {
        self.active
    }

    pub fn route(&self) -> Route {
        match self.active {
            Some(module) => Route::Module {
                module,
                step: self.module(module).step(),
            },
            None => Route::Overview,
        }
    }

    /// A module is locked while its prerequisite has not been started.
    pub fn is_locked(&self, module: ModuleId) -> bool {
        module
            .prerequisite()
            .is_some_and(|prerequisite| !self.module(prerequisite).started())
    }

    pub fn progress_flags(&self) -> ProgressFlags {
        let mut flags = ProgressFlags::default();
        for wizard in &self.modules {
            flags.set(wizard.module(), wizard.started());
        }
        flags
    }

    pub fn overview(&self) -> DashboardOverview {
        DashboardOverview {
            name: self.identity.name().to_string(),
            email: self.identity.email().to_string(),
            active_module: self.active,
            modules: self
                .modules
                .iter()
                .map(|wizard| ModuleCard::new(wizard, self.is_locked(wizard.module())))
                .collect(),
        }
    }

    pub fn view(&self, module: ModuleId) -> ModuleView {
        ModuleView::from(self.module(module))
    }

    /// Snapshot of one module for the persistence collaborator.
    pub fn submission(&self, module: ModuleId) -> Submission {
        let wizard = self.module(module);
        Submission {
            identity: self.identity.clone(),
            module,
            answers: wizard.answers().clone(),
            status: wizard.status(),
            progress: self.progress_flags(),
            submitted_at: Timestamp::now(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Routing
    // ───────────────────────────────────────────────────────────────

    /// Deep-link entry.
    ///
    /// Goes straight into `target` when it is unlocked and already started;
    /// otherwise the user lands on the overview.
    pub fn route_entry(&mut self, target: ModuleId) -> Route {
        if !self.is_locked(target) && self.module(target).started() {
            self.enter(target)
        } else {
            self.active = None;
            Route::Overview
        }
    }

    /// Opens a module from the overview.
    pub fn open_module(&mut self, target: ModuleId) -> Result<Route, DomainError> {
        if let Some(prerequisite) = target.prerequisite().filter(|_| self.is_locked(target)) {
            return Err(DomainError::new(
                ErrorCode::ModuleLocked,
                format!(
                    "{} opens after {} has been started",
                    target.display_name(),
                    prerequisite.display_name()
                ),
            )
            .with_detail("module", target.as_str())
            .with_detail("prerequisite", prerequisite.as_str()));
        }
        Ok(self.enter(target))
    }

    /// Leaves the active module; returns the module that was open.
    pub fn exit_module(&mut self) -> Option<ModuleId> {
        self.active.take()
    }

    fn enter(&mut self, target: ModuleId) -> Route {
        let step = self.modules[target.order_index()].enter();
        self.active = Some(target);
        Route::Module {
            module: target,
            step,
        }
    }

    fn active_wizard(&mut self, module: ModuleId) -> Result<&mut ModuleWizard, DomainError> {
        if self.active != Some(module) {
            return Err(DomainError::new(
                ErrorCode::ModuleNotActive,
                format!("{} is not the open module", module.display_name()),
            )
            .with_detail("module", module.as_str()));
        }
        Ok(&mut self.modules[module.order_index()])
    }

    // ───────────────────────────────────────────────────────────────
    // Wizard commands on the active module
    // ───────────────────────────────────────────────────────────────

    pub fn replace_answers(
        &mut self,
        module: ModuleId,
        answers: ModuleAnswers,
    ) -> Result<EditOutcome, DomainError> {
        self.active_wizard(module)?.replace_answers(answers)
    }

    pub fn advance(&mut self, module: ModuleId) -> Result<usize, DomainError> {
        self.active_wizard(module)?.advance()
    }

    pub fn back(&mut self, module: ModuleId) -> Result<usize, DomainError> {
        Ok(self.active_wizard(module)?.back())
    }

    /// Sends the module for review and returns to the overview.
    pub fn submit_for_review(&mut self, module: ModuleId) -> Result<(), DomainError> {
        self.active_wizard(module)?.submit_for_review()?;
        self.active = None;
        Ok(())
    }

    /// Admin decision; works whether or not the module is open.
    pub fn mark_completed(&mut self, module: ModuleId) -> Result<(), DomainError> {
        self.modules[module.order_index()].mark_completed()
    }

    /// Resets every module to its initial state.
    pub fn logout(&mut self) {
        self.modules = ModuleId::ORDER.map(ModuleWizard::new);
        self.active = None;
        self.set_placement_radius(self.placement_radius);
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod orchestrator_test;
