//! Wizard engine - step sequencing, gating and the per-module state machine.
//!
//! # Module Organization
//!
//! - `questionnaire` - traits every answer record implements
//! - `sequencer` - resume step, step count and cursor clamping
//! - `gate` - whether "next" is allowed
//! - `module_wizard` - status, cursor and started flag of one module

pub mod gate;
mod module_wizard;
mod questionnaire;
pub mod sequencer;

pub use gate::can_advance;
pub use module_wizard::{EditOutcome, ModuleWizard};
pub use questionnaire::{Questionnaire, WizardStep};
pub use sequencer::{clamp_step, completion_step, resume_step, step_at, step_count};
