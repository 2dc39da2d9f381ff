//! Questionnaire trait - what a module's answer record exposes to the wizard.

use std::fmt;

/// A step of one module's questionnaire.
pub trait WizardStep: Copy + fmt::Debug + PartialEq + 'static {
    /// Short heading shown above the step.
    fn title(&self) -> &'static str;
}

/// An answer record that knows its own step sequence and predicates.
///
/// Two predicates exist per step:
///
/// - `has_content` - the step's minimum content is present; drives resume
/// - `is_complete` - the step satisfies its thresholds; gates "next"
///
/// `is_complete` implies `has_content` for every step.
pub trait Questionnaire {
    type Step: WizardStep;

    /// Ordered steps for the branch currently selected in this record.
    ///
    /// Modules with a branch return only the branch-selection step while the
    /// branch is unset.
    fn checklist(&self) -> &'static [Self::Step];

    /// True while the record still waits for its branch-selection answer.
    fn branch_pending(&self) -> bool {
        false
    }

    fn has_content(&self, step: Self::Step) -> bool;

    fn is_complete(&self, step: Self::Step) -> bool;
}
