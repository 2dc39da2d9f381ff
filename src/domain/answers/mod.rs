//! Answer stores - one record per diagnostic module.
//!
//! # Module Organization
//!
//! - `mentor`, `mentee`, `method`, `delivery` - per-module records and step rules
//! - `items` - collection entries shared between records
//! - `text` - length and cardinality checks used by the step rules
//!
//! [`ModuleAnswers`] wraps the four records so the wizard, the dashboard and
//! the persistence ports can handle any module through one type.

pub mod delivery;
pub mod items;
pub mod mentee;
pub mod mentor;
pub mod method;
mod text;

pub use delivery::{
    DeliveryAnswers, DeliveryStep, MeetingFrequency, PricePositioning, ProgramDuration,
    SupportChannel,
};
pub use items::{Accelerator, Characteristic, HistoryItem, JourneyStep, Moment, Persona, Pillar};
pub use mentee::{ClientVolume, FromScratchAnswers, MenteeAnswers, MenteeStep, WithClientsAnswers};
pub use mentor::{MentorAnswers, MentorStep};
pub use method::{
    FromZeroMethodAnswers, MethodAnswers, MethodStage, MethodStep, ProgramFormat,
    StructuredMethodAnswers,
};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ModuleId, ModuleStatus};
use crate::domain::wizard::{gate, sequencer, WizardStep};

/// Runs `$body` with `$q` bound to the inner record, whatever the module.
macro_rules! with_questionnaire {
    ($answers:expr, $q:ident => $body:expr) => {
        match $answers {
            ModuleAnswers::Mentor($q) => $body,
            ModuleAnswers::Mentee($q) => $body,
            ModuleAnswers::Method($q) => $body,
            ModuleAnswers::Delivery($q) => $body,
        }
    };
}

/// The answer record of any module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "module", content = "answers", rename_all = "snake_case")]
pub enum ModuleAnswers {
    Mentor(MentorAnswers),
    Mentee(MenteeAnswers),
    Method(MethodAnswers),
    Delivery(DeliveryAnswers),
}

impl ModuleAnswers {
    /// Initial record for a module.
    pub fn empty(module: ModuleId) -> Self {
        match module {
            ModuleId::Mentor => Self::Mentor(MentorAnswers::default()),
            ModuleId::Mentee => Self::Mentee(MenteeAnswers::default()),
            ModuleId::Method => Self::Method(MethodAnswers::default()),
            ModuleId::Delivery => Self::Delivery(DeliveryAnswers::default()),
        }
    }

    /// Parses the bare camelCase record of `module`.
    pub fn from_json(module: ModuleId, value: serde_json::Value) -> Result<Self, DomainError> {
        let parsed = match module {
            ModuleId::Mentor => serde_json::from_value(value).map(Self::Mentor),
            ModuleId::Mentee => serde_json::from_value(value).map(Self::Mentee),
            ModuleId::Method => serde_json::from_value(value).map(Self::Method),
            ModuleId::Delivery => serde_json::from_value(value).map(Self::Delivery),
        };
        parsed.map_err(|e| {
            DomainError::new(
                ErrorCode::InvalidFormat,
                format!("Invalid {} answers: {}", module.display_name(), e),
            )
            .with_detail("module", module.as_str())
        })
    }

    /// The bare camelCase record, without the module tag.
    pub fn to_json(&self) -> serde_json::Value {
        let value = with_questionnaire!(self, q => serde_json::to_value(q));
        value.unwrap_or(serde_json::Value::Null)
    }

    pub fn module(&self) -> ModuleId {
        match self {
            Self::Mentor(_) => ModuleId::Mentor,
            Self::Mentee(_) => ModuleId::Mentee,
            Self::Method(_) => ModuleId::Method,
            Self::Delivery(_) => ModuleId::Delivery,
        }
    }

    pub fn resume_step(&self) -> usize {
        with_questionnaire!(self, q => sequencer::resume_step(q))
    }

    pub fn step_count(&self) -> usize {
        with_questionnaire!(self, q => sequencer::step_count(q))
    }

    pub fn completion_step(&self) -> usize {
        with_questionnaire!(self, q => sequencer::completion_step(q))
    }

    pub fn clamp_step(&self, step: usize) -> usize {
        with_questionnaire!(self, q => sequencer::clamp_step(q, step))
    }

    pub fn can_advance(&self, status: ModuleStatus, step: usize) -> bool {
        with_questionnaire!(self, q => gate::can_advance(status, step, q))
    }

    /// Gives unassigned collection items a stable id, reusing the ids of
    /// `previous` where the item sits at the same index.
    pub fn assign_item_ids(&mut self, previous: &ModuleAnswers) {
        match (self, previous) {
            (Self::Mentor(next), Self::Mentor(prev)) => next.assign_item_ids(prev),
            (Self::Mentee(next), Self::Mentee(prev)) => next.assign_item_ids(prev),
            (Self::Method(next), Self::Method(prev)) => next.assign_item_ids(prev),
            (Self::Delivery(next), Self::Delivery(prev)) => next.assign_item_ids(prev),
            (next, _) => {
                let empty = ModuleAnswers::empty(next.module());
                next.assign_item_ids(&empty);
            }
        }
    }

    /// Keeps every positioned item inside the disc of `radius`.
    pub fn clamp_placements(&mut self, radius: f64) {
        match self {
            Self::Mentor(answers) => answers.clamp_placements(radius),
            Self::Mentee(answers) => answers.clamp_placements(radius),
            Self::Method(_) | Self::Delivery(_) => {}
        }
    }

    /// Heading of `step`, or `None` for the sentinel and out-of-range steps.
    pub fn step_title(&self, step: usize) -> Option<&'static str> {
        with_questionnaire!(self, q => sequencer::step_at(q, step).map(|s| s.title()))
    }
}

impl Default for ModuleAnswers {
    fn default() -> Self {
        Self::empty(ModuleId::Mentor)
    }
}

impl From<MentorAnswers> for ModuleAnswers {
    fn from(answers: MentorAnswers) -> Self {
        Self::Mentor(answers)
    }
}

impl From<MenteeAnswers> for ModuleAnswers {
    fn from(answers: MenteeAnswers) -> Self {
        Self::Mentee(answers)
    }
}

impl From<MethodAnswers> for ModuleAnswers {
    fn from(answers: MethodAnswers) -> Self {
        Self::Method(answers)
    }
}

impl From<DeliveryAnswers> for ModuleAnswers {
    fn from(answers: DeliveryAnswers) -> Self {
        Self::Delivery(answers)
    }
}
