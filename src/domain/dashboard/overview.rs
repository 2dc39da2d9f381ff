use serde::Serialize;

use crate::domain::foundation::{ModuleId, ModuleProgress, ModuleStatus};
use crate::domain::wizard::ModuleWizard;

/// The main dashboard overview - one card per module, in canonical order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub name: String,
    pub email: String,
    pub active_module: Option<ModuleId>,
    pub modules: Vec<ModuleCard>,
}

impl DashboardOverview {
    pub fn card(&self, module: ModuleId) -> Option<&ModuleCard> {
        self.modules.iter().find(|card| card.module == module)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCard {
    pub module: ModuleId,
    pub title: &'static str,
    pub status: ModuleStatus,
    pub progress: ModuleProgress,
    /// Step the user lands on when entering the module
    pub resume_step: usize,
    pub step_count: usize,
    /// Mentor has not been started yet
    pub locked: bool,
}

impl ModuleCard {
    pub fn new(wizard: &ModuleWizard, locked: bool) -> Self {
        Self {
            module: wizard.module(),
            title: wizard.module().display_name(),
            status: wizard.status(),
            progress: wizard.progress(),
            resume_step: wizard.resume_step(),
            step_count: wizard.step_count(),
            locked,
        }
    }
}

/// What the wizard shows for one module.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleView {
    pub module: ModuleId,
    pub status: ModuleStatus,
    pub progress: ModuleProgress,
    pub step: usize,
    pub step_count: usize,
    /// `None` on the completion view
    pub step_title: Option<&'static str>,
    pub at_completion: bool,
    pub can_advance: bool,
    pub read_only: bool,
    pub answers: serde_json::Value,
}

impl From<&ModuleWizard> for ModuleView {
    fn from(wizard: &ModuleWizard) -> Self {
        Self {
            module: wizard.module(),
            status: wizard.status(),
            progress: wizard.progress(),
            step: wizard.step(),
            step_count: wizard.step_count(),
            step_title: wizard.step_title(),
            at_completion: wizard.is_at_completion(),
            can_advance: wizard.can_advance(),
            read_only: wizard.is_read_only(),
            answers: wizard.answers().to_json(),
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
