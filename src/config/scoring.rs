//! Positional scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::scoring::{RadarScale, TargetScale, DEFAULT_DRAG_THRESHOLD_PX, DEFAULT_RADIUS};

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Radius of the placement disc in percentage units
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Pointer travel that turns a press into a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold_px: f64,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        // The widget only spans 50 units from its centre.
        if !self.radius.is_finite() || self.radius <= 0.0 || self.radius > 50.0 {
            return Err(ValidationError::InvalidRadius);
        }
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(ValidationError::InvalidDragThreshold);
        }
        Ok(())
    }

    pub fn target_scale(&self) -> Result<TargetScale, ValidationError> {
        TargetScale::new(self.radius).map_err(|_| ValidationError::InvalidRadius)
    }

    pub fn radar_scale(&self) -> Result<RadarScale, ValidationError> {
        RadarScale::new(self.radius).map_err(|_| ValidationError::InvalidRadius)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            drag_threshold_px: default_drag_threshold(),
        }
    }
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

fn default_drag_threshold() -> f64 {
    DEFAULT_DRAG_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_scale().unwrap(), TargetScale::default());
    }

    #[test]
    fn radius_must_fit_the_widget() {
        for radius in [0.0, -1.0, 51.0, f64::NAN] {
            let config = ScoringConfig {
                radius,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidRadius));
        }
    }

    #[test]
    fn negative_drag_threshold_is_rejected() {
        let config = ScoringConfig {
            drag_threshold_px: -0.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDragThreshold));
    }
}
