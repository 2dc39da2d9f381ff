//! Positional scoring - turns 2D placements into bounded scores.
//!
//! Two widgets share the geometry but not the formula:
//!
//! - `TargetScale` - characteristic prioritisation, relevance 0..=100
//! - `RadarScale` - persona confidence, 1.0..=5.0
//!
//! `PositionalBoard` and `GestureRecognizer` handle the pointer side:
//! click-versus-drag and one active item at a time.

mod board;
mod geometry;
mod gesture;
mod radar;
mod target;

pub use board::{clamp_placements, PositionalBoard, Positioned, Surface};
pub use geometry::{Point, DEFAULT_RADIUS};
pub use gesture::{
    GestureOutcome, GestureRecognizer, GestureState, PixelPoint, DEFAULT_DRAG_THRESHOLD_PX,
};
pub use radar::{RadarScale, MAX_CONFIDENCE, MIN_CONFIDENCE};
pub use target::{TargetScale, MAX_RELEVANCE, MIN_RELEVANCE};
