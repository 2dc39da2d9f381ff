//! Delivery module - how the program reaches the client.

use serde::{Deserialize, Serialize};

use super::items::{assign_ids, Accelerator};
use super::method::ProgramFormat;
use super::text::{complete_collection, is_filled, longer_than};
use crate::domain::wizard::{Questionnaire, WizardStep};

pub const MIN_ACCELERATORS: usize = 3;
pub const GUARANTEE_MIN_CHARS: usize = 20;
pub const SUCCESS_METRICS_MIN_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramDuration {
    UpToThreeMonths,
    ThreeToSixMonths,
    SixToTwelveMonths,
    OverTwelveMonths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportChannel {
    Chat,
    Email,
    Calls,
    Community,
    Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingFrequency {
    Weekly,
    Biweekly,
    Monthly,
    OnDemand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePositioning {
    Entry,
    Mid,
    Premium,
    HighTicket,
}

/// Answers of the Delivery module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryAnswers {
    pub format: Option<ProgramFormat>,
    pub duration: Option<ProgramDuration>,
    pub accelerators: Vec<Accelerator>,
    pub support_channels: Vec<SupportChannel>,
    pub meeting_frequency: Option<MeetingFrequency>,
    pub price_positioning: Option<PricePositioning>,
    pub guarantee: String,
    pub success_metrics: String,
}

impl DeliveryAnswers {
    pub(crate) fn assign_item_ids(&mut self, previous: &Self) {
        assign_ids(&mut self.accelerators, &previous.accelerators);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryStep {
    Format,
    Accelerators,
    Support,
    Offer,
    Success,
}

const DELIVERY_STEPS: [DeliveryStep; 5] = [
    DeliveryStep::Format,
    DeliveryStep::Accelerators,
    DeliveryStep::Support,
    DeliveryStep::Offer,
    DeliveryStep::Success,
];

impl WizardStep for DeliveryStep {
    fn title(&self) -> &'static str {
        match self {
            DeliveryStep::Format => "Format and duration",
            DeliveryStep::Accelerators => "Accelerators",
            DeliveryStep::Support => "Support between sessions",
            DeliveryStep::Offer => "Offer and guarantee",
            DeliveryStep::Success => "Measuring success",
        }
    }
}

impl Questionnaire for DeliveryAnswers {
    type Step = DeliveryStep;


    fn checklist(&self) -> &'static [DeliveryStep] {
        &DELIVERY_STEPS
    }

    fn has_content(&self, step: DeliveryStep) -> bool {
        match step {
            DeliveryStep::Format => self.format.is_some(),
            DeliveryStep::Accelerators => !self.accelerators.is_empty(),
            DeliveryStep::Support => {
                !self.support_channels.is_empty() || self.meeting_frequency.is_some()
            }
            DeliveryStep::Offer => self.price_positioning.is_some(),
            DeliveryStep::Success => is_filled(&self.success_metrics),
        }
    }

    fn is_complete(&self, step: DeliveryStep) -> bool {
        match step {
            DeliveryStep::Format => self.format.is_some() && self.duration.is_some(),
            DeliveryStep::Accelerators => complete_collection(
                &self.accelerators,
                MIN_ACCELERATORS,
                Accelerator::is_complete,
            ),
            DeliveryStep::Support => {
                !self.support_channels.is_empty() && self.meeting_frequency.is_some()
            }
            DeliveryStep::Offer => {
                self.price_positioning.is_some()
                    && longer_than(&self.guarantee, GUARANTEE_MIN_CHARS)
            }
            DeliveryStep::Success => {
                longer_than(&self.success_metrics, SUCCESS_METRICS_MIN_CHARS)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn complete_delivery() -> DeliveryAnswers {
        DeliveryAnswers {
            format: Some(ProgramFormat::Hybrid),
            duration: Some(ProgramDuration::ThreeToSixMonths),
            accelerators: vec![
                Accelerator::new("Pricing calculator", "Spreadsheet that sets day rates"),
                Accelerator::new("Proposal templates", "Five proposals that closed"),
                Accelerator::new("Hot seat calls", "Weekly live reviews of real deals"),
            ],
            support_channels: vec![SupportChannel::Community, SupportChannel::Chat],
            meeting_frequency: Some(MeetingFrequency::Biweekly),
            price_positioning: Some(PricePositioning::Premium),
            guarantee: "Full refund if rates do not rise within 90 days".to_string(),
            success_metrics: "Average day rate and number of retained clients".to_string(),
        }
    }
}
