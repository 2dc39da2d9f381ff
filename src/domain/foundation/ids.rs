//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of an item inside an answer collection (history entry, pillar, persona...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Creates a new random ItemId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an ItemId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Placeholder for an item that has not been given an id yet.
    pub fn unassigned() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_unassigned(&self) -> bool {
        self.0.is_nil()
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

/// Items deserialized without an id start unassigned; the wizard assigns a
/// stable id when the record is stored.
impl Default for ItemId {
    fn default() -> Self {
        Self::unassigned()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn default_is_unassigned() {
        assert!(ItemId::default().is_unassigned());
        assert!(!ItemId::new().is_unassigned());
    }

    #[test]
    fn parses_from_display_output() {
        let id = ItemId::new();
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_malformed_uuid() {
        assert!("not-a-uuid".parse::<ItemId>().is_err());
    }

    #[test]
    fn serializes_as_bare_string() {
        let uuid = Uuid::parse_str("6f1c1b8e-2d4e-4a8f-9a51-0c7a8c1f2b3d").unwrap();
        let json = serde_json::to_string(&ItemId::from_uuid(uuid)).unwrap();
        assert_eq!(json, "\"6f1c1b8e-2d4e-4a8f-9a51-0c7a8c1f2b3d\"");
    }
}
