//! Review lifecycle of a diagnostic module.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Stored lifecycle status of a module.
///
/// Valid transitions:
/// - Todo -> UnderReview (owner submits from the completion view)
/// - UnderReview -> Completed (admin decision, never taken by the wizard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    #[default]
    Todo,
    UnderReview,
    Completed,
}

impl ModuleStatus {
    /// Returns true if answers can still be edited.
    pub fn is_editable(&self) -> bool {
        matches!(self, ModuleStatus::Todo)
    }

    /// Returns true if the module is frozen for inspection.
    pub fn is_read_only(&self) -> bool {
        !self.is_editable()
    }

    /// Derives the display label from the stored status and the started flag.
    pub fn progress(&self, started: bool) -> ModuleProgress {
        match self {
            ModuleStatus::Todo if started => ModuleProgress::InProgress,
            ModuleStatus::Todo => ModuleProgress::Todo,
            ModuleStatus::UnderReview => ModuleProgress::UnderReview,
            ModuleStatus::Completed => ModuleProgress::Completed,
        }
    }
}

impl StateMachine for ModuleStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ModuleStatus::*;
        matches!((self, target), (Todo, UnderReview) | (UnderReview, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            ModuleStatus::Todo => vec![ModuleStatus::UnderReview],
            ModuleStatus::UnderReview => vec![ModuleStatus::Completed],
            ModuleStatus::Completed => vec![],
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModuleStatus::Todo => "To Do",
            ModuleStatus::UnderReview => "Under Review",
            ModuleStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

/// Derived progress label shown on the dashboard.
///
/// `InProgress` is never stored; it is `Todo` plus the started flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleProgress {
    Todo,
    InProgress,
    UnderReview,
    Completed,
}

impl ModuleProgress {
    /// Returns true if the owner has put any work into the module.
    pub fn has_progress(&self) -> bool {
        !matches!(self, ModuleProgress::Todo)
    }
}
