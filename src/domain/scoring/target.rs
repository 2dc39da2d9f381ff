//! Target (bullseye) scale used to prioritise characteristics.
//!
//! The closer a characteristic sits to the centre, the more relevant it is.
//! Relevance is an integer percentage: 100 at the centre, 0 on the rim.

use super::geometry::{Point, DEFAULT_RADIUS};
use crate::domain::foundation::ValidationError;

/// Highest relevance, reached at the centre.
pub const MAX_RELEVANCE: u8 = 100;

/// Lowest relevance, reached on the rim of the disc.
pub const MIN_RELEVANCE: u8 = 0;

/// Relevance scale of the characteristic-prioritisation target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetScale {
    radius: f64,
}

impl TargetScale {
    /// Creates a scale for a disc of the given radius.
    pub fn new(radius: f64) -> Result<Self, ValidationError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ValidationError::invalid_format(
                "radius",
                format!("target radius must be positive, got {radius}"),
            ));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Clamps a raw placement onto the disc.
    pub fn clamp(&self, point: Point) -> Point {
        point.clamp_to_radius(self.radius)
    }

    /// `round(clamp(100 - distance / R * 100, 0, 100))`
    pub fn relevance_at(&self, point: Point) -> u8 {
        let distance = self.clamp(point).distance();
        let raw = 100.0 - distance / self.radius * 100.0;
        raw.clamp(0.0, 100.0).round() as u8
    }

    /// Relevance of a placement given as raw coordinates.
    pub fn score_from_position(&self, x: f64, y: f64) -> u8 {
        self.relevance_at(Point::new(x, y))
    }

    /// Placement producing `relevance` along `angle`; used by the numeric slider.
    pub fn position_for(&self, relevance: u8, angle: f64) -> Point {
        let relevance = f64::from(relevance.min(MAX_RELEVANCE));
        let distance = (100.0 - relevance) / 100.0 * self.radius;
        self.clamp(Point::from_polar(distance, angle))
    }

    /// Moves `current` to the given relevance while keeping its angle.
    pub fn reposition(&self, current: Point, relevance: u8) -> Point {
        self.position_for(relevance, current.angle())
    }
}

impl Default for TargetScale {
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
    fn rejects_non_positive_radius() {
        assert!(TargetScale::new(0.0).is_err());
        assert!(TargetScale::new(-5.0).is_err());
        assert!(TargetScale::new(f64::NAN).is_err());
    }

    #[test]
    fn centre_is_fully_relevant() {
        assert_eq!(TargetScale::default().score_from_position(0.0, 0.0), MAX_RELEVANCE);
    }

    #[test]
    fn rim_is_irrelevant() {
        assert_eq!(TargetScale::default().score_from_position(0.0, -48.0), MIN_RELEVANCE);
    }

    #[test]
    fn dragging_past_the_rim_clamps_and_scores_zero() {
        let scale = TargetScale::default();
        let dropped = scale.clamp(Point::new(60.0, 0.0));
        assert_eq!(dropped, Point::new(48.0, 0.0));
        assert_eq!(scale.relevance_at(dropped), 0);
    }

    #[test]
    fn halfway_is_fifty() {
        assert_eq!(TargetScale::default().score_from_position(24.0, 0.0), 50);
    }

    #[test]
    fn relevance_rounds_to_nearest_integer() {
        // 100 - 10/48*100 = 79.1666...
        assert_eq!(TargetScale::default().score_from_position(10.0, 0.0), 79);
        // 100 - 1/48*100 = 97.9166...
        assert_eq!(TargetScale::default().score_from_position(0.0, 1.0), 98);
    }

    #[test]
    fn slider_keeps_the_current_angle() {
        let scale = TargetScale::default();
        let current = Point::new(0.0, 12.0);
        let moved = scale.reposition(current, 25);
        assert!((moved.angle() - current.angle()).abs() < 1e-9);
        assert!((moved.distance() - 36.0).abs() < 1e-9);
    }

    #[test]
    fn slider_from_centre_moves_along_positive_x() {
        let moved = TargetScale::default().reposition(Point::CENTER, 50);
        assert!((moved.x - 24.0).abs() < 1e-9);
        assert!(moved.y.abs() < 1e-9);
    }

    #[test]
    fn slider_caps_relevance_above_maximum() {
        let p = TargetScale::default().position_for(250, 0.0);
        assert_eq!(p.distance(), 0.0);
    }

    proptest! {
        #[test]
        fn relevance_is_bounded(x in -200.0f64..200.0, y in -200.0f64..200.0) {
            let r = TargetScale::default().score_from_position(x, y);
            prop_assert!(r <= MAX_RELEVANCE);
        }

        #[test]
        fn slider_position_scores_back_to_the_same_relevance(
            relevance in 0u8..=100,
            angle in -3.14f64..3.14,
        ) {
            let scale = TargetScale::default();
            let p = scale.position_for(relevance, angle);
            prop_assert_eq!(scale.relevance_at(p), relevance);
        }

        #[test]
        fn relevance_decreases_with_distance(a in 0.0f64..48.0, b in 0.0f64..48.0) {
            let scale = TargetScale::default();
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scale.score_from_position(near, 0.0) >= scale.score_from_position(far, 0.0));
        }
    }
}
