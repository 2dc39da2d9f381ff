//! PositionalBoard - a draggable set of placed items.
//!
//! The board works on its own copy of the items. Callers read the items back
//! with [`PositionalBoard::into_items`] and write them into a new answer record,
//! keeping answer updates whole-record replacements.

use super::geometry::{Point, DEFAULT_RADIUS};
use super::gesture::{GestureOutcome, GestureRecognizer, PixelPoint, DEFAULT_DRAG_THRESHOLD_PX};
use crate::domain::foundation::ValidationError;

/// An answer item that carries a placement on a positional widget.
pub trait Positioned {
    fn position(&self) -> Point;
    fn set_position(&mut self, position: Point);
}

/// Pulls every placement in `items` back onto the disc of `radius`.
pub fn clamp_placements<T: Positioned>(items: &mut [T], radius: f64) {
    for item in items {
        let clamped = item.position().clamp_to_radius(radius);
        item.set_position(clamped);
    }
}

/// Rendered size of the widget, used to map pointer pixels to percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    width: f64,
    height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Result<Self, ValidationError> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ValidationError::invalid_format(
                "surface",
                format!("surface must have a positive size, got {width}x{height}"),
            ));
        }
        Ok(Self { width, height })
    }

    /// Converts a pointer position into percentage offsets from the centre.
    pub fn to_percent(&self, at: PixelPoint) -> Point {
        Point::new(
            at.x / self.width * 100.0 - 50.0,
            at.y / self.height * 100.0 - 50.0,
        )
    }

    /// Converts a placement back into surface pixels.
    pub fn to_pixels(&self, point: Point) -> PixelPoint {
        PixelPoint::new(
            (point.x + 50.0) / 100.0 * self.width,
            (point.y + 50.0) / 100.0 * self.height,
        )
    }
}

/// Items on a target or radar widget plus the single live gesture.
#[derive(Debug, Clone)]
pub struct PositionalBoard<T> {
    items: Vec<T>,
    surface: Surface,
    radius: f64,
    recognizer: GestureRecognizer,
}

impl<T: Positioned> PositionalBoard<T> {
    /// Creates a board with the reference radius and drag threshold.
    pub fn new(items: Vec<T>, surface: Surface) -> Self {
        Self::with_settings(items, surface, DEFAULT_RADIUS, DEFAULT_DRAG_THRESHOLD_PX)
    }

    pub fn with_settings(items: Vec<T>, surface: Surface, radius: f64, drag_threshold: f64) -> Self {
        Self {
            items,
            surface,
            radius,
            recognizer: GestureRecognizer::new(drag_threshold),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The one item currently owning the pointer, if any.
    pub fn active(&self) -> Option<usize> {
        self.recognizer.active_index()
    }

    /// Pointer pressed on item `index`.
    ///
    /// Returns false if the index is unknown or another item is already active.
    pub fn press(&mut self, index: usize, at: PixelPoint) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.recognizer.press(index, at)
    }

    /// Pointer moved; returns the new placement when an item is being dragged.
    pub fn pointer_move(&mut self, at: PixelPoint) -> Option<Point> {
        let index = self.recognizer.pointer_move(at)?;
        Some(self.follow_pointer(index, at))
    }

    /// Pointer released; a drop also applies the final pointer position.
    pub fn release(&mut self, at: PixelPoint) -> GestureOutcome {
        let outcome = self.recognizer.release(at);
        if let GestureOutcome::Dropped { index } = outcome {
            self.follow_pointer(index, at);
        }
        outcome
    }

    /// Abandons the current gesture; placements made so far are kept.
    pub fn cancel(&mut self) {
        self.recognizer.cancel();
    }

    /// Places an item directly (numeric slider path). Returns the clamped placement.
    pub fn place(&mut self, index: usize, point: Point) -> Option<Point> {
        let clamped = point.clamp_to_radius(self.radius);
        let item = self.items.get_mut(index)?;
        item.set_position(clamped);
        Some(clamped)
    }

    fn follow_pointer(&mut self, index: usize, at: PixelPoint) -> Point {
        let point = self.surface.to_percent(at).clamp_to_radius(self.radius);
        if let Some(item) = self.items.get_mut(index) {
            item.set_position(point);
        }
        point
    }
}
