use serde::{Deserialize, Serialize};

use crate::domain::answers::ModuleAnswers;
use crate::domain::foundation::{Identity, ModuleId, ModuleStatus, Timestamp};

/// Per-module "has progress" badges carried by every submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressFlags {
    pub mentor: bool,
    pub mentee: bool,
    pub method: bool,
    pub delivery: bool,
}

impl ProgressFlags {
    pub fn get(&self, module: ModuleId) -> bool {
        match module {
            ModuleId::Mentor => self.mentor,
            ModuleId::Mentee => self.mentee,
            ModuleId::Method => self.method,
            ModuleId::Delivery => self.delivery,
        }
    }

    pub fn set(&mut self, module: ModuleId, value: bool) {
        match module {
            ModuleId::Mentor => self.mentor = value,
            ModuleId::Mentee => self.mentee = value,
            ModuleId::Method => self.method = value,
            ModuleId::Delivery => self.delivery = value,
        }
    }
}

/// Full state of one module as handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub identity: Identity,
    pub module: ModuleId,
    pub answers: ModuleAnswers,
    pub status: ModuleStatus,
    pub progress: ProgressFlags,
    pub submitted_at: Timestamp,
}

impl Submission {
    /// Whether the submitted module itself had been started.
    pub fn started(&self) -> bool {
        self.progress.get(self.module)
    }
}
