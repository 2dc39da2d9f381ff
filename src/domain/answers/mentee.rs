//! Mentee module - who the mentor serves.
//!
//! The first answer, `has_clients`, chooses between two step sequences:
//!
//! - with clients: validate the hypothesis against the clients they already have
//! - without clients: build the ideal-client picture from scratch
//!
//! Each branch keeps its answers in its own sub-record, so switching back and
//! forth never mixes or loses what was typed under the other branch.

use serde::{Deserialize, Serialize};

use super::items::{assign_ids, Characteristic, JourneyStep, Persona};
use super::text::{complete_collection, is_filled, longer_than};
use crate::domain::scoring::clamp_placements;
use crate::domain::wizard::{Questionnaire, WizardStep};

pub const CLIENT_PROFILE_MIN_CHARS: usize = 30;
pub const MIN_PERSONAS: usize = 2;
pub const PAIN_MIN_CHARS: usize = 30;
pub const EVIDENCE_MIN_CHARS: usize = 20;
pub const IDEAL_CLIENT_MIN_CHARS: usize = 30;
pub const MIN_IDEAL_CHARACTERISTICS: usize = 3;
pub const MIN_JOURNEY_STEPS: usize = 5;
pub const FIRST_CLIENTS_MIN_CHARS: usize = 30;

/// How many clients the mentor currently serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientVolume {
    OneToFive,
    SixToTwenty,
    MoreThanTwenty,
}

/// Answers of the "already has clients" branch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WithClientsAnswers {
    pub client_profile: String,
    pub client_volume: Option<ClientVolume>,
    pub personas: Vec<Persona>,
    pub main_pain: String,
    pub desired_outcome: String,
    pub evidence: String,
    pub objections: String,
}

/// Answers of the "no clients yet" branch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FromScratchAnswers {
    pub ideal_client: String,
    pub characteristics: Vec<Characteristic>,
    pub main_pain: String,
    pub desired_outcome: String,
    pub journey: Vec<JourneyStep>,
    pub discovery_channel: String,
    pub first_clients_plan: String,
}

/// Answers of the Mentee module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenteeAnswers {
    pub has_clients: Option<bool>,
    pub with_clients: WithClientsAnswers,
    pub from_scratch: FromScratchAnswers,
}

impl MenteeAnswers {
    pub(crate) fn assign_item_ids(&mut self, previous: &Self) {
        assign_ids(&mut self.with_clients.personas, &previous.with_clients.personas);
        assign_ids(
            &mut self.from_scratch.characteristics,
            &previous.from_scratch.characteristics,
        );
        assign_ids(&mut self.from_scratch.journey, &previous.from_scratch.journey);
    }

    /// Both branches are clamped, selected or not.
    pub(crate) fn clamp_placements(&mut self, radius: f64) {
        clamp_placements(&mut self.with_clients.personas, radius);
        clamp_placements(&mut self.from_scratch.characteristics, radius);
    }
}

/// Steps of the Mentee module across both branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenteeStep {
    Branch,
    // with clients
    CurrentClients,
    Personas,
    ClientPains,
    Evidence,
    // from scratch
    IdealClient,
    Characteristics,
    Pains,
    ConsumptionJourney,
    FirstClients,
}

const BRANCH_ONLY: [MenteeStep; 1] = [MenteeStep::Branch];

const WITH_CLIENTS_STEPS: [MenteeStep; 5] = [
    MenteeStep::Branch,
    MenteeStep::CurrentClients,
    MenteeStep::Personas,
    MenteeStep::ClientPains,
    MenteeStep::Evidence,
];

const FROM_SCRATCH_STEPS: [MenteeStep; 6] = [
    MenteeStep::Branch,
    MenteeStep::IdealClient,
    MenteeStep::Characteristics,
    MenteeStep::Pains,
    MenteeStep::ConsumptionJourney,
    MenteeStep::FirstClients,
];

impl WizardStep for MenteeStep {
    fn title(&self) -> &'static str {
        match self {
            MenteeStep::Branch => "Do you already have clients?",
            MenteeStep::CurrentClients => "Current clients",
            MenteeStep::Personas => "Persona radar",
            MenteeStep::ClientPains | MenteeStep::Pains => "Pains and desired outcome",
            MenteeStep::Evidence => "Validation evidence",
            MenteeStep::IdealClient => "Ideal client",
            MenteeStep::Characteristics => "Ideal client characteristics",
            MenteeStep::ConsumptionJourney => "Consumption journey",
            MenteeStep::FirstClients => "First clients plan",
        }
    }
}

impl Questionnaire for MenteeAnswers {
    type Step = MenteeStep;


    fn checklist(&self) -> &'static [MenteeStep] {
        match self.has_clients {
            None => &BRANCH_ONLY,
            Some(true) => &WITH_CLIENTS_STEPS,
            Some(false) => &FROM_SCRATCH_STEPS,
        }
    }

    fn branch_pending(&self) -> bool {
        self.has_clients.is_none()
    }

    fn has_content(&self, step: MenteeStep) -> bool {
        let with = &self.with_clients;
        let scratch = &self.from_scratch;
        match step {
            MenteeStep::Branch => self.has_clients.is_some(),
            MenteeStep::CurrentClients => {
                is_filled(&with.client_profile) || with.client_volume.is_some()
            }
            MenteeStep::Personas => !with.personas.is_empty(),
            MenteeStep::ClientPains => is_filled(&with.main_pain),
            MenteeStep::Evidence => is_filled(&with.evidence),
            MenteeStep::IdealClient => is_filled(&scratch.ideal_client),
            MenteeStep::Characteristics => !scratch.characteristics.is_empty(),
            MenteeStep::Pains => is_filled(&scratch.main_pain),
            MenteeStep::ConsumptionJourney => !scratch.journey.is_empty(),
            MenteeStep::FirstClients => is_filled(&scratch.first_clients_plan),
        }
    }

    fn is_complete(&self, step: MenteeStep) -> bool {
        let with = &self.with_clients;
        let scratch = &self.from_scratch;
        match step {
            MenteeStep::Branch => self.has_clients.is_some(),
            MenteeStep::CurrentClients => {
                longer_than(&with.client_profile, CLIENT_PROFILE_MIN_CHARS)
                    && with.client_volume.is_some()
            }
            MenteeStep::Personas => {
                complete_collection(&with.personas, MIN_PERSONAS, Persona::is_complete)
            }
            MenteeStep::ClientPains => {
                longer_than(&with.main_pain, PAIN_MIN_CHARS)
                    && longer_than(&with.desired_outcome, PAIN_MIN_CHARS)
            }
            MenteeStep::Evidence => {
                longer_than(&with.evidence, EVIDENCE_MIN_CHARS)
                    && longer_than(&with.objections, EVIDENCE_MIN_CHARS)
            }
            MenteeStep::IdealClient => longer_than(&scratch.ideal_client, IDEAL_CLIENT_MIN_CHARS),
            MenteeStep::Characteristics => complete_collection(
                &scratch.characteristics,
                MIN_IDEAL_CHARACTERISTICS,
                Characteristic::is_complete,
            ),
            MenteeStep::Pains => {
                longer_than(&scratch.main_pain, PAIN_MIN_CHARS)
                    && longer_than(&scratch.desired_outcome, PAIN_MIN_CHARS)
            }
            MenteeStep::ConsumptionJourney => {
                complete_collection(&scratch.journey, MIN_JOURNEY_STEPS, JourneyStep::is_complete)
                    && is_filled(&scratch.discovery_channel)
            }
            MenteeStep::FirstClients => {
                longer_than(&scratch.first_clients_plan, FIRST_CLIENTS_MIN_CHARS)
            }
        }
    }
}
