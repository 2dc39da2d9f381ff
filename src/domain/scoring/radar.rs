//! Radar scale used to place personas by confidence.
//!
//! Confidence is a continuous value in [1, 5]: 5 at the centre (the owner is
//! sure this persona is a client), 1 on the rim. This is an independent scale
//! from the target tool and must not be derived from relevance.

use super::geometry::{Point, DEFAULT_RADIUS};
use crate::domain::foundation::ValidationError;

/// Confidence at the centre of the radar.
pub const MAX_CONFIDENCE: f64 = 5.0;

/// Confidence on the rim of the radar.
pub const MIN_CONFIDENCE: f64 = 1.0;

/// Confidence scale of the persona radar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarScale {
    radius: f64,
}

impl RadarScale {
    /// Creates a scale for a radar of the given radius.
    pub fn new(radius: f64) -> Result<Self, ValidationError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ValidationError::invalid_format(
                "radius",
                format!("radar radius must be positive, got {radius}"),
            ));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Clamps a raw placement onto the radar.
    pub fn clamp(&self, point: Point) -> Point {
        point.clamp_to_radius(self.radius)
    }

    /// `5 - (distance / R) * 4`
    pub fn confidence_at(&self, point: Point) -> f64 {
        let distance = self.clamp(point).distance();
        (MAX_CONFIDENCE - (distance / self.radius) * 4.0).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }

    /// Confidence of a placement given as raw coordinates.
    pub fn score_from_position(&self, x: f64, y: f64) -> f64 {
        self.confidence_at(Point::new(x, y))
    }

    /// Whole-number confidence level (1..=5) for labels.
    pub fn confidence_level(&self, point: Point) -> u8 {
        self.confidence_at(point).round() as u8
    }

    /// Placement producing `confidence` along `angle`; used by the numeric slider.
    pub fn position_for(&self, confidence: f64, angle: f64) -> Point {
        let confidence = if confidence.is_finite() {
            confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
        } else {
            MIN_CONFIDENCE
        };
        let distance = (MAX_CONFIDENCE - confidence) / 4.0 * self.radius;
        self.clamp(Point::from_polar(distance, angle))
    }

    /// Moves `current` to the given confidence while keeping its angle.
    pub fn reposition(&self, current: Point, confidence: f64) -> Point {
        self.position_for(confidence, current.angle())
    }
}

impl Default for RadarScale {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn centre_is_maximum_confidence() {
        assert_eq!(RadarScale::default().score_from_position(0.0, 0.0), MAX_CONFIDENCE);
    }

    #[test]
    fn rim_is_minimum_confidence() {
        assert_eq!(RadarScale::default().score_from_position(-48.0, 0.0), MIN_CONFIDENCE);
    }

    #[test]
    fn beyond_the_rim_is_clamped() {
        assert_eq!(RadarScale::default().score_from_position(0.0, 90.0), MIN_CONFIDENCE);
    }

    #[test]
    fn halfway_is_three() {
        assert_eq!(RadarScale::default().score_from_position(0.0, 24.0), 3.0);
    }

    #[test]
    fn confidence_level_rounds() {
        let radar = RadarScale::default();
        // 5 - 6/48*4 = 4.5 rounds away from zero
        assert_eq!(radar.confidence_level(Point::new(6.0, 0.0)), 5);
        // 5 - 30/48*4 = 2.5
        assert_eq!(radar.confidence_level(Point::new(30.0, 0.0)), 3);
        assert_eq!(radar.confidence_level(Point::new(40.0, 0.0)), 2);
    }

    #[test]
    fn slider_keeps_angle_and_sets_distance() {
        let radar = RadarScale::default();
        let current = Point::new(-10.0, -10.0);
        let moved = radar.reposition(current, 2.0);
        assert!((moved.distance() - 36.0).abs() < 1e-9);
        assert!((moved.angle() - current.angle()).abs() < 1e-9);
    }

    #[test]
    fn slider_clamps_out_of_range_confidence() {
        let radar = RadarScale::default();
        assert!((radar.position_for(9.0, 0.0).distance()).abs() < 1e-12);
        assert!((radar.position_for(-3.0, 0.0).distance() - 48.0).abs() < 1e-9);
        assert!((radar.position_for(f64::NAN, 0.0).distance() - 48.0).abs() < 1e-9);
    }

    #[test]
    fn radar_and_target_disagree_at_the_same_point() {
        let point = Point::new(12.0, 0.0);
        let confidence = RadarScale::default().confidence_at(point);
        let relevance = super::super::TargetScale::default().relevance_at(point);
        assert_eq!(confidence, 4.0);
        assert_eq!(relevance, 75);
    }

    proptest! {
        #[test]
        fn confidence_is_bounded(x in -500.0f64..500.0, y in -500.0f64..500.0) {
            let c = RadarScale::default().score_from_position(x, y);
            prop_assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&c));
        }

        #[test]
        fn slider_position_reads_back_the_same_confidence(
            confidence in 1.0f64..=5.0,
            angle in -3.14f64..3.14,
        ) {
            let radar = RadarScale::default();
            let p = radar.position_for(confidence, angle);
            prop_assert!((radar.confidence_at(p) - confidence).abs() < 1e-9);
        }
    }
}
