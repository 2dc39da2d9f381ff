//! Autosave timing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::AutoSaveConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AutosaveSettings {
    /// Inactivity before a change is persisted
    #[serde(default = "default_quiet_period")]
    pub quiet_period_ms: u64,

    /// How long the saved indicator stays visible
    #[serde(default = "default_saved_display")]
    pub saved_display_ms: u64,
}

impl AutosaveSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(100..=60_000).contains(&self.quiet_period_ms) {
            return Err(ValidationError::InvalidQuietPeriod);
        }
        if self.saved_display_ms > 60_000 {
            return Err(ValidationError::InvalidSavedDisplay);
        }
        Ok(())
    }

    pub fn pipeline_config(&self) -> AutoSaveConfig {
        AutoSaveConfig::default()
            .with_quiet_period(Duration::from_millis(self.quiet_period_ms))
            .with_saved_display(Duration::from_millis(self.saved_display_ms))
    }
}

impl Default for AutosaveSettings {
    fn default() -> Self {
        Self {
            quiet_period_ms: default_quiet_period(),
            saved_display_ms: default_saved_display(),
        }
    }
}

fn default_quiet_period() -> u64 {
    2000
}

fn default_saved_display() -> u64 {
    2000
}
