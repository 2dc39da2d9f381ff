//! Step sequencing - where a returning user lands and which steps exist.
//!
//! Steps are 1-based. For a checklist of `n` steps, `n + 1` is the completion
//! sentinel: every step has content and the completion view is shown.

use super::questionnaire::Questionnaire;

/// Number of steps in the currently selected branch.
pub fn step_count<Q: Questionnaire>(answers: &Q) -> usize {
    answers.checklist().len()
}

/// The completion sentinel for the currently selected branch.
pub fn completion_step<Q: Questionnaire>(answers: &Q) -> usize {
    step_count(answers) + 1
}

/// First step whose presence predicate fails, or the completion sentinel.
pub fn resume_step<Q: Questionnaire>(answers: &Q) -> usize {
    answers
        .checklist()
        .iter()
        .position(|step| !answers.has_content(*step))
        .map(|index| index + 1)
        .unwrap_or_else(|| completion_step(answers))
}

/// The step at a 1-based position, if the current branch has one there.
pub fn step_at<Q: Questionnaire>(answers: &Q, step: usize) -> Option<Q::Step> {
    step.checked_sub(1)
        .and_then(|index| answers.checklist().get(index))
        .copied()
}

/// Brings a cursor back into the range valid for the current branch.
///
/// A pending branch always lands on step 1; anything past the sentinel lands
/// on the sentinel.
pub fn clamp_step<Q: Questionnaire>(answers: &Q, step: usize) -> usize {
    if answers.branch_pending() {
        return 1;
    }
    step.clamp(1, completion_step(answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::mentee::fixtures::complete_from_scratch;
    use crate::domain::answers::mentor::fixtures::complete_mentor;
    use crate::domain::answers::{MenteeAnswers, MenteeStep, MentorAnswers, MentorStep};
    use proptest::prelude::*;

    #[test]
    fn step_at_is_one_based() {
        let answers = MentorAnswers::default();
        assert_eq!(step_at(&answers, 0), None);
        assert_eq!(step_at(&answers, 1), Some(MentorStep::Story));
        assert_eq!(step_at(&answers, 5), Some(MentorStep::Purpose));
        assert_eq!(step_at(&answers, 6), None);
    }

    #[test]
    fn resume_is_idempotent_on_complete_record() {
        let answers = complete_mentor();
        assert_eq!(resume_step(&answers), resume_step(&answers));
        assert_eq!(resume_step(&answers), completion_step(&answers));
    }

    #[test]
    fn pending_branch_clamps_to_first_step() {
        let answers = MenteeAnswers::default();
        assert_eq!(clamp_step(&answers, 4), 1);
    }

    #[test]
    fn clamp_respects_branch_length() {
        let mut answers = complete_from_scratch();
        assert_eq!(clamp_step(&answers, 7), 7);
        answers.has_clients = Some(true);
        assert_eq!(clamp_step(&answers, 7), 6);
        assert_eq!(step_at(&answers, 2), Some(MenteeStep::CurrentClients));
    }

    proptest! {
        #[test]
        fn clamped_step_is_always_addressable(step in 0usize..50) {
            let answers = complete_mentor();
            let clamped = clamp_step(&answers, step);
            prop_assert!(clamped >= 1);
            prop_assert!(clamped <= completion_step(&answers));
        }

        #[test]
        fn resume_never_passes_sentinel(has_clients in proptest::option::of(any::<bool>())) {
            let answers = MenteeAnswers { has_clients, ..complete_from_scratch() };
            prop_assert!(resume_step(&answers) <= completion_step(&answers));
        }
    }
}
