//! Mentor module - who the mentor is and what shaped them.

use serde::{Deserialize, Serialize};

use super::items::{assign_ids, Characteristic, HistoryItem, Moment};
use super::text::{complete_collection, is_filled, longer_than};
use crate::domain::scoring::clamp_placements;
use crate::domain::wizard::{Questionnaire, WizardStep};

/// The story is the foundational narrative, so it needs the most text.
pub const STORY_MIN_CHARS: usize = 100;
pub const EXPERTISE_MIN_CHARS: usize = 20;
pub const MIN_HISTORY_ITEMS: usize = 1;
pub const MIN_CHARACTERISTICS: usize = 5;
pub const MIN_MOMENTS: usize = 3;
pub const PURPOSE_MIN_CHARS: usize = 30;

/// Answers of the Mentor module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MentorAnswers {
    pub story: String,
    pub expertise: String,
    pub history: Vec<HistoryItem>,
    pub characteristics: Vec<Characteristic>,
    pub moments: Vec<Moment>,
    pub motivation: String,
    pub differentiator: String,
}

impl MentorAnswers {
    pub(crate) fn assign_item_ids(&mut self, previous: &Self) {
        assign_ids(&mut self.history, &previous.history);
        assign_ids(&mut self.characteristics, &previous.characteristics);
        assign_ids(&mut self.moments, &previous.moments);
    }

    pub(crate) fn clamp_placements(&mut self, radius: f64) {
        clamp_placements(&mut self.characteristics, radius);
    }
}

/// Steps of the Mentor module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentorStep {
    Story,
    History,
    Characteristics,
    Moments,
    Purpose,
}

const MENTOR_STEPS: [MentorStep; 5] = [
    MentorStep::Story,
    MentorStep::History,
    MentorStep::Characteristics,
    MentorStep::Moments,
    MentorStep::Purpose,
];

impl WizardStep for MentorStep {
    fn title(&self) -> &'static str {
        match self {
            MentorStep::Story => "Your story",
            MentorStep::History => "Professional history",
            MentorStep::Characteristics => "Mentor characteristics",
            MentorStep::Moments => "Defining moments",
            MentorStep::Purpose => "Purpose and differentiator",
        }
    }
}

impl Questionnaire for MentorAnswers {
    type Step = MentorStep;


    fn checklist(&self) -> &'static [MentorStep] {
        &MENTOR_STEPS
    }

    fn has_content(&self, step: MentorStep) -> bool {
        match step {
            MentorStep::Story => is_filled(&self.story),
            MentorStep::History => !self.history.is_empty(),
            MentorStep::Characteristics => !self.characteristics.is_empty(),
            MentorStep::Moments => !self.moments.is_empty(),
            MentorStep::Purpose => is_filled(&self.motivation),
        }
    }

    fn is_complete(&self, step: MentorStep) -> bool {
        match step {
            MentorStep::Story => {
                longer_than(&self.story, STORY_MIN_CHARS)
                    && longer_than(&self.expertise, EXPERTISE_MIN_CHARS)
            }
            MentorStep::History => {
                complete_collection(&self.history, MIN_HISTORY_ITEMS, HistoryItem::is_complete)
            }
            MentorStep::Characteristics => complete_collection(
                &self.characteristics,
                MIN_CHARACTERISTICS,
                Characteristic::is_complete,
            ),
            MentorStep::Moments => {
                complete_collection(&self.moments, MIN_MOMENTS, Moment::is_complete)
            }
            MentorStep::Purpose => {
                longer_than(&self.motivation, PURPOSE_MIN_CHARS)
                    && longer_than(&self.differentiator, PURPOSE_MIN_CHARS)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::complete_mentor;
    use super::*;
    use crate::domain::wizard::resume_step;

    #[test]
    fn fresh_record_resumes_at_first_step() {
        assert_eq!(resume_step(&MentorAnswers::default()), 1);
    }

    #[test]
    fn one_history_item_is_enough_to_move_past_history() {
        let answers = MentorAnswers {
            story: "Once upon a time".to_string(),
            history: vec![HistoryItem::default()],
            ..Default::default()
        };
        assert_eq!(resume_step(&answers), 3);
    }

    #[test]
    fn complete_record_resumes_at_completion() {
        assert_eq!(resume_step(&complete_mentor()), 6);
    }

    #[test]
    fn story_must_exceed_one_hundred_characters() {
        let mut answers = complete_mentor();
        answers.story = "x".repeat(100);
        assert!(!answers.is_complete(MentorStep::Story));
        answers.story.push('x');
        assert!(answers.is_complete(MentorStep::Story));
    }

    #[test]
    fn expertise_must_exceed_twenty_characters() {
        let mut answers = complete_mentor();
        answers.expertise = "x".repeat(20);
        assert!(!answers.is_complete(MentorStep::Story));
    }

    #[test]
    fn partially_filled_history_item_blocks() {
        let mut answers = complete_mentor();
        answers.history.push(HistoryItem::new("2020", "", ""));
        assert!(!answers.is_complete(MentorStep::History));
    }

    #[test]
    fn characteristics_need_five_labelled_items() {
        let mut answers = complete_mentor();
        answers.characteristics.pop();
        assert!(!answers.is_complete(MentorStep::Characteristics));

        answers.characteristics.push(Characteristic::new("  "));
        assert!(!answers.is_complete(MentorStep::Characteristics));
    }

    #[test]
    fn moments_need_three_complete_items() {
        let mut answers = complete_mentor();
        answers.moments.truncate(2);
        assert!(!answers.is_complete(MentorStep::Moments));
    }

    #[test]
    fn purpose_needs_both_fields() {
        let mut answers = complete_mentor();
        answers.differentiator.clear();
        assert!(!answers.is_complete(MentorStep::Purpose));
        assert!(answers.has_content(MentorStep::Purpose));
    }

    #[test]
    fn every_complete_step_has_content() {
        let answers = complete_mentor();
        for step in answers.checklist() {
            assert!(answers.is_complete(*step), "{:?} should be complete", step);
            assert!(answers.has_content(*step));
        }
    }

    #[test]
    fn deserializes_partial_camel_case_json() {
        let answers: MentorAnswers =
            serde_json::from_str(r#"{"story":"hello","history":[]}"#).unwrap();
        assert_eq!(answers.story, "hello");
        assert!(answers.moments.is_empty());
    }
}
