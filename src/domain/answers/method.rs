//! Method module - the mentoring method and its pillars.
//!
//! `stage` picks between describing a method that already exists
//! (`Structured`, one dense step) and building one from zero (three steps).

use serde::{Deserialize, Serialize};

use super::items::{assign_ids, Pillar};
use super::text::{at_least, complete_collection, is_filled, longer_than};
use crate::domain::wizard::{Questionnaire, WizardStep};

pub const METHOD_NAME_MIN_CHARS: usize = 5;
pub const TRANSFORMATION_MIN_CHARS: usize = 30;
pub const TARGET_RESULT_MIN_CHARS: usize = 20;
pub const MIN_PILLARS: usize = 3;

/// Maturity of the mentor's method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodStage {
    Structured,
    FromZero,
}

/// How the program is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramFormat {
    Individual,
    Group,
    Hybrid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredMethodAnswers {
    pub name: String,
    pub transformation: String,
    pub pillars: Vec<Pillar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FromZeroMethodAnswers {
    pub transformation: String,
    pub target_result: String,
    pub pillars: Vec<Pillar>,
    pub name: String,
    pub format: Option<ProgramFormat>,
}

/// Answers of the Method module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodAnswers {
    pub stage: Option<MethodStage>,
    pub structured: StructuredMethodAnswers,
    pub from_zero: FromZeroMethodAnswers,
}

impl MethodAnswers {
    pub(crate) fn assign_item_ids(&mut self, previous: &Self) {
        assign_ids(&mut self.structured.pillars, &previous.structured.pillars);
        assign_ids(&mut self.from_zero.pillars, &previous.from_zero.pillars);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodStep {
    Stage,
    StructuredMethod,
    Transformation,
    Pillars,
    Naming,
}

const STAGE_ONLY: [MethodStep; 1] = [MethodStep::Stage];

const STRUCTURED_STEPS: [MethodStep; 2] = [MethodStep::Stage, MethodStep::StructuredMethod];

const FROM_ZERO_STEPS: [MethodStep; 4] = [
    MethodStep::Stage,
    MethodStep::Transformation,
    MethodStep::Pillars,
    MethodStep::Naming,
];

impl WizardStep for MethodStep {
    fn title(&self) -> &'static str {
        match self {
            MethodStep::Stage => "Where is your method today?",
            MethodStep::StructuredMethod => "Your method",
            MethodStep::Transformation => "The transformation",
            MethodStep::Pillars => "Method pillars",
            MethodStep::Naming => "Name and format",
        }
    }
}

fn pillars_complete(pillars: &[Pillar]) -> bool {
    complete_collection(pillars, MIN_PILLARS, Pillar::is_complete)
}

impl Questionnaire for MethodAnswers {
    type Step = MethodStep;


    fn checklist(&self) -> &'static [MethodStep] {
        match self.stage {
            None => &STAGE_ONLY,
            Some(MethodStage::Structured) => &STRUCTURED_STEPS,
            Some(MethodStage::FromZero) => &FROM_ZERO_STEPS,
        }
    }

    fn branch_pending(&self) -> bool {
        self.stage.is_none()
    }

    fn has_content(&self, step: MethodStep) -> bool {
        let structured = &self.structured;
        let from_zero = &self.from_zero;
        match step {
            MethodStep::Stage => self.stage.is_some(),
            MethodStep::StructuredMethod => {
                is_filled(&structured.name)
                    || is_filled(&structured.transformation)
                    || !structured.pillars.is_empty()
            }
            MethodStep::Transformation => is_filled(&from_zero.transformation),
            MethodStep::Pillars => !from_zero.pillars.is_empty(),
            MethodStep::Naming => is_filled(&from_zero.name) || from_zero.format.is_some(),
        }
    }

    fn is_complete(&self, step: MethodStep) -> bool {
        let structured = &self.structured;
        let from_zero = &self.from_zero;
        match step {
            MethodStep::Stage => self.stage.is_some(),
            MethodStep::StructuredMethod => {
                at_least(&structured.name, METHOD_NAME_MIN_CHARS)
                    && at_least(&structured.transformation, TRANSFORMATION_MIN_CHARS)
                    && pillars_complete(&structured.pillars)
            }
            MethodStep::Transformation => {
                at_least(&from_zero.transformation, TRANSFORMATION_MIN_CHARS)
                    && longer_than(&from_zero.target_result, TARGET_RESULT_MIN_CHARS)
            }
            MethodStep::Pillars => pillars_complete(&from_zero.pillars),
            MethodStep::Naming => {
                at_least(&from_zero.name, METHOD_NAME_MIN_CHARS) && from_zero.format.is_some()
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::domain::wizard::resume_step;

    #[test]
    fn structured_stage_walkthrough() {
        let mut answers = MethodAnswers::default();
        assert_eq!(resume_step(&answers), 1);

        answers.stage = Some(MethodStage::Structured);
        assert_eq!(resume_step(&answers), 2);
        assert!(!answers.is_complete(MethodStep::StructuredMethod));

        answers.structured = complete_structured().structured;
        assert!(answers.is_complete(MethodStep::StructuredMethod));
        assert_eq!(answers.checklist().len(), 2);
        assert_eq!(resume_step(&answers), 3);
    }

    #[test]
    fn structured_method_needs_three_pillars() {
        let mut answers = complete_structured();
        answers.structured.pillars.pop();
        assert!(!answers.is_complete(MethodStep::StructuredMethod));
        assert!(answers.has_content(MethodStep::StructuredMethod));
    }

    #[test]
    fn name_threshold_is_inclusive() {
        let mut answers = complete_structured();
        answers.structured.name = "Scale".to_string();
        assert!(answers.is_complete(MethodStep::StructuredMethod));
        answers.structured.name = "Scal".to_string();
        assert!(!answers.is_complete(MethodStep::StructuredMethod));
    }

    #[test]
    fn short_pillar_blocks_structured_method() {
        let mut answers = complete_structured();
        answers.structured.pillars[1].how = "Interview".to_string();
        assert!(!answers.is_complete(MethodStep::StructuredMethod));
    }

    #[test]
    fn from_zero_stage_has_four_steps() {
        let answers = complete_from_zero();
        assert_eq!(answers.checklist().len(), 4);
        assert_eq!(resume_step(&answers), 5);
    }

    #[test]
    fn naming_needs_format() {
        let mut answers = complete_from_zero();
        answers.from_zero.format = None;
        assert!(!answers.is_complete(MethodStep::Naming));
        assert!(answers.has_content(MethodStep::Naming));
    }

    #[test]
    fn target_result_must_exceed_twenty_characters() {
        let mut answers = complete_from_zero();
        answers.from_zero.target_result = "x".repeat(20);
        assert!(!answers.is_complete(MethodStep::Transformation));
    }

    #[test]
    fn stage_serializes_snake_case() {
        let value = serde_json::to_value(complete_from_zero()).unwrap();
        assert_eq!(value["stage"], "from_zero");
        assert_eq!(value["fromZero"]["format"], "group");
        assert_eq!(value["fromZero"]["targetResult"], "Double the monthly revenue in six months");
    }
}
