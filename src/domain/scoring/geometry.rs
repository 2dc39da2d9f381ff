//! Percentage-space geometry shared by the positional widgets.
//!
//! Coordinates are percentage offsets from the widget centre, so the visible
//! area spans [-50, 50] on both axes. Placements live inside a disc of
//! radius [`DEFAULT_RADIUS`] unless configured otherwise.

use serde::{Deserialize, Serialize};

/// Radius of the placement disc in percentage units.
pub const DEFAULT_RADIUS: f64 = 48.0;

/// A placement relative to the widget centre.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The widget centre.
    pub const CENTER: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from a distance and an angle in radians.
    pub fn from_polar(distance: f64, angle: f64) -> Self {
        Self {
            x: distance * angle.cos(),
            y: distance * angle.sin(),
        }
    }

    /// Euclidean distance to the centre.
    pub fn distance(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle of the point around the centre; the centre itself reports 0.
    pub fn angle(&self) -> f64 {
        if self.distance() == 0.0 {
            0.0
        } else {
            self.y.atan2(self.x)
        }
    }

    /// Returns true if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Pulls the point back onto the disc along its own angle.
    ///
    /// Points already inside the disc are returned unchanged. Non-finite
    /// input collapses to the centre.
    pub fn clamp_to_radius(self, radius: f64) -> Point {
        if !self.is_finite() {
            return Point::CENTER;
        }

        let distance = self.distance();
        if distance <= radius {
            return self;
        }

        let factor = radius / distance;
        let scaled = Point::new(self.x * factor, self.y * factor);
        if scaled.distance() > radius {
            // rounding can leave the rescaled point one ulp outside
            let inward = factor * (1.0 - f64::EPSILON);
            Point::new(self.x * inward, self.y * inward)
        } else {
            scaled
        }
    }
}
