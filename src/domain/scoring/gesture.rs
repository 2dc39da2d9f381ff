//! Pointer gesture recognition for the positional widgets.
//!
//! A press on an item is ambiguous until the pointer has travelled far
//! enough: releasing close to where it started is a click (open the item
//! editor), travelling further is a drag (move the item).
//!
//! ```text
//! Idle --press--> Pressed --travel > threshold--> Dragging --release--> Idle (Dropped)
//!                    |
//!                    +--release within threshold--> Idle (Clicked)
//! ```

use serde::{Deserialize, Serialize};

/// Pointer travel, in pixels, that turns a press into a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 5.0;

/// A pointer position in surface pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line travel between two pointer positions.
    pub fn travel_to(&self, other: PixelPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Current phase of the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    Pressed { index: usize, origin: PixelPoint },
    Dragging { index: usize, origin: PixelPoint },
}

/// What a finished gesture meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No gesture was in progress.
    Ignored,
    /// Released within the threshold: open the editor for this item.
    Clicked { index: usize },
    /// Released after dragging: the item has a new placement.
    Dropped { index: usize },
}

/// Turns press/move/release events into clicks and drags.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    state: GestureState,
    threshold: f64,
}

impl GestureRecognizer {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: GestureState::Idle,
            threshold: threshold.max(0.0),
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Index of the item owning the current gesture.
    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Pressed { index, .. } | GestureState::Dragging { index, .. } => {
                Some(index)
            }
        }
    }

    /// Starts a gesture on `index`. Returns false while another gesture is live.
    pub fn press(&mut self, index: usize, at: PixelPoint) -> bool {
        if self.state != GestureState::Idle {
            return false;
        }
        self.state = GestureState::Pressed { index, origin: at };
        true
    }

    /// Feeds a pointer move; returns the item to move when dragging.
    pub fn pointer_move(&mut self, at: PixelPoint) -> Option<usize> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Pressed { index, origin } => {
                if origin.travel_to(at) > self.threshold {
                    self.state = GestureState::Dragging { index, origin };
                    Some(index)
                } else {
                    None
                }
            }
            GestureState::Dragging { index, .. } => Some(index),
        }
    }

    /// Ends the gesture and reports whether it was a click or a drag.
    pub fn release(&mut self, at: PixelPoint) -> GestureOutcome {
        let outcome = match self.state {
            GestureState::Idle => GestureOutcome::Ignored,
            GestureState::Pressed { index, origin } => {
                if origin.travel_to(at) > self.threshold {
                    GestureOutcome::Dropped { index }
                } else {
                    GestureOutcome::Clicked { index }
                }
            }
            GestureState::Dragging { index, .. } => GestureOutcome::Dropped { index },
        };
        self.state = GestureState::Idle;
        outcome
    }

    /// Abandons the gesture without an outcome (pointer left the window).
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD_PX)
    }
}
