//! Collection items shared by the answer records.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::text::{at_least, is_filled};
use crate::domain::foundation::ItemId;
use crate::domain::scoring::{Point, Positioned, DEFAULT_RADIUS};

/// Minimum length of a pillar's "what".
pub const PILLAR_WHAT_MIN_CHARS: usize = 10;
/// Minimum length of a pillar's "why".
pub const PILLAR_WHY_MIN_CHARS: usize = 15;
/// Minimum length of a pillar's "how".
pub const PILLAR_HOW_MIN_CHARS: usize = 15;

/// A milestone in the mentor's professional history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryItem {
    pub id: ItemId,
    pub period: String,
    pub title: String,
    pub description: String,
}

impl HistoryItem {
    pub fn new(
        period: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::new(),
            period: period.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        is_filled(&self.period) && is_filled(&self.title) && is_filled(&self.description)
    }
}

/// A characteristic placed on the prioritisation target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Characteristic {
    pub id: ItemId,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl Characteristic {
    /// New characteristic at the centre of the target.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            label: label.into(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Same characteristic at another placement, kept on the reference disc.
    pub fn at(mut self, point: Point) -> Self {
        self.set_position(point.clamp_to_radius(DEFAULT_RADIUS));
        self
    }

    pub fn is_complete(&self) -> bool {
        is_filled(&self.label)
    }
}

impl Positioned for Characteristic {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }
}

/// A remarkable moment of the mentor's journey and what it taught.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Moment {
    pub id: ItemId,
    pub title: String,
    pub lesson: String,
}

impl Moment {
    pub fn new(title: impl Into<String>, lesson: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            lesson: lesson.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        is_filled(&self.title) && is_filled(&self.lesson)
    }
}

/// A client persona placed on the confidence radar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Persona {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub x: f64,
    pub y: f64,
}

impl Persona {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: description.into(),
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn at(mut self, point: Point) -> Self {
        self.set_position(point.clamp_to_radius(DEFAULT_RADIUS));
        self
    }

    pub fn is_complete(&self) -> bool {
        is_filled(&self.name) && is_filled(&self.description)
    }
}

impl Positioned for Persona {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }
}

/// One stage of how a prospective client discovers and consumes the offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JourneyStep {
    pub id: ItemId,
    pub title: String,
    pub description: String,
}

impl JourneyStep {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        is_filled(&self.title) && is_filled(&self.description)
    }
}

/// A pillar of the mentoring method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pillar {
    pub id: ItemId,
    pub what: String,
    pub why: String,
    pub how: String,
}

impl Pillar {
    pub fn new(what: impl Into<String>, why: impl Into<String>, how: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            what: what.into(),
            why: why.into(),
            how: how.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        at_least(&self.what, PILLAR_WHAT_MIN_CHARS)
            && at_least(&self.why, PILLAR_WHY_MIN_CHARS)
            && at_least(&self.how, PILLAR_HOW_MIN_CHARS)
    }
}

/// Something in the delivery that speeds up the client's result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Accelerator {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

impl Accelerator {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        is_filled(&self.name) && is_filled(&self.description)
    }
}

/// A collection entry that carries its own id.
pub trait Identified {
    fn id(&self) -> ItemId;
    fn set_id(&mut self, id: ItemId);
}

macro_rules! impl_identified {
    ($($item:ty),* $(,)?) => {
        $(
            impl Identified for $item {
                fn id(&self) -> ItemId {
                    self.id
                }

                fn set_id(&mut self, id: ItemId) {
                    self.id = id;
                }
            }
        )*
    };
}

impl_identified!(HistoryItem, Characteristic, Moment, Persona, JourneyStep, Pillar, Accelerator);

/// Gives every unassigned item an id.
///
/// An item reuses the id of the stored item at the same index unless another
/// incoming item already claims it, so resending an unchanged collection
/// without ids yields an identical record.
pub(crate) fn assign_ids<T: Identified>(items: &mut [T], previous: &[T]) {
    let mut taken: HashSet<ItemId> = items
        .iter()
        .map(Identified::id)
        .filter(|id| !id.is_unassigned())
        .collect();

    for (index, item) in items.iter_mut().enumerate() {
        if !item.id().is_unassigned() {
            continue;
        }
        let id = previous
            .get(index)
            .map(Identified::id)
            .filter(|id| !id.is_unassigned() && !taken.contains(id))
            .unwrap_or_else(ItemId::new);
        taken.insert(id);
        item.set_id(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_item_needs_every_field() {
        assert!(HistoryItem::new("2015", "Founded agency", "Grew to 20 people").is_complete());
        assert!(!HistoryItem::new("2015", "", "Grew to 20 people").is_complete());
    }

    #[test]
    fn placements_stay_on_the_disc() {
        let inside = Characteristic::new("Listens").at(Point::new(0.0, 30.0));
        assert_eq!(inside.position(), Point::new(0.0, 30.0));

        let outside = Characteristic::new("Strict").at(Point::new(96.0, 0.0));
        assert_eq!(outside.position(), Point::new(48.0, 0.0));

        let persona = Persona::new("Ana", "Freelance designer").at(Point::new(0.0, -90.0));
        assert!(persona.position().distance() <= DEFAULT_RADIUS);
    }

    #[test]
    fn pillar_thresholds_are_inclusive() {
        let pillar = Pillar::new("1234567890", "123456789012345", "123456789012345");
        assert!(pillar.is_complete());
        let short_why = Pillar::new("1234567890", "12345678901234", "123456789012345");
        assert!(!short_why.is_complete());
    }

    #[test]
    fn item_without_id_deserializes_unassigned() {
        let moment: Moment =
            serde_json::from_str(r#"{"title":"First client","lesson":"Charge more"}"#).unwrap();
        assert!(moment.is_complete());
        assert!(moment.id.is_unassigned());
    }

    #[test]
    fn assign_ids_reuses_stored_ids_by_index() {
        let stored = vec![Moment::new("A", "a"), Moment::new("B", "b")];
        let mut incoming = vec![Moment::default(), Moment::default(), Moment::default()];

        assign_ids(&mut incoming, &stored);
        assert_eq!(incoming[0].id, stored[0].id);
        assert_eq!(incoming[1].id, stored[1].id);
        assert!(!incoming[2].id.is_unassigned());
    }

    #[test]
    fn assign_ids_keeps_explicit_ids_unique() {
        let stored = vec![Moment::new("A", "a"), Moment::new("B", "b")];
        let mut incoming = vec![stored[1].clone(), Moment::default()];

        assign_ids(&mut incoming, &stored);
        assert_eq!(incoming[0].id, stored[1].id);
        assert_ne!(incoming[1].id, stored[1].id);
        assert!(!incoming[1].id.is_unassigned());
    }

    #[test]
    fn positioned_items_serialize_flat_coordinates() {
        let c = Characteristic::new("Patient").at(Point::new(12.5, -3.0));
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["x"], 12.5);
        assert_eq!(value["y"], -3.0);
        assert_eq!(value["label"], "Patient");
    }
}
