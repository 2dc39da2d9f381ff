//! Validation gate for forward navigation.

use super::questionnaire::Questionnaire;
use super::sequencer::step_at;
use crate::domain::foundation::ModuleStatus;

/// Whether "next" is allowed from `step`.
///
/// Read-only modules can always be browsed forward. For editable modules the
/// step must exist in the current branch and satisfy its advance predicate;
/// the completion sentinel never advances.
pub fn can_advance<Q: Questionnaire>(status: ModuleStatus, step: usize, answers: &Q) -> bool {
    if status.is_read_only() {
        return true;
    }
    step_at(answers, step).is_some_and(|current| answers.is_complete(current))
}
