//! ModuleId enum representing the four diagnostic modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The four diagnostic modules, in the order the dashboard presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    Mentor,
    Mentee,
    Method,
    Delivery,
}

impl ModuleId {
    /// Canonical order of the modules.
    pub const ORDER: [ModuleId; 4] = [
        ModuleId::Mentor,
        ModuleId::Mentee,
        ModuleId::Method,
        ModuleId::Delivery,
    ];

    /// Returns all modules in canonical order.
    pub fn all() -> &'static [ModuleId; 4] {
        &Self::ORDER
    }

    /// Returns the 0-based position of this module in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            ModuleId::Mentor => 0,
            ModuleId::Mentee => 1,
            ModuleId::Method => 2,
            ModuleId::Delivery => 3,
        }
    }

    /// Returns the module that must be started before this one can be opened.
    ///
    /// Only Mentor gates the others; the remaining modules are siblings.
    pub fn prerequisite(&self) -> Option<ModuleId> {
        match self {
            ModuleId::Mentor => None,
            _ => Some(ModuleId::Mentor),
        }
    }

    /// Stable identifier used in submissions and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Mentor => "mentor",
            ModuleId::Mentee => "mentee",
            ModuleId::Method => "method",
            ModuleId::Delivery => "delivery",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleId::Mentor => "Mentor",
            ModuleId::Mentee => "Mentee",
            ModuleId::Method => "Method",
            ModuleId::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ModuleId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ValidationError::invalid_format("module", format!("unknown module '{s}'")))
    }
}
