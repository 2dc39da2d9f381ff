//! HTTP DTOs for diagnostic endpoints.
//!
//! The domain view models are already designed for serialization, so the
//! responses wrap them with the bits of session state the client needs.

pub use crate::domain::dashboard::{DashboardOverview, ModuleView, Route};

use serde::Serialize;
use std::collections::HashMap;

use crate::application::SaveIndicator;
use crate::domain::wizard::EditOutcome;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub route: Route,
    pub overview: DashboardOverview,
}

/// Result of a routing command (enter, open, exit, submit).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub route: Route,
    /// The opened module, when the route leads into one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ModuleView>,
}

/// Current state of one module.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResponse {
    pub view: ModuleView,
    pub active: bool,
    pub save_indicator: SaveIndicator,
}

/// PUT /api/modules/:module/answers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResponse {
    pub outcome: EditOutcome,
    pub view: ModuleView,
    pub save_indicator: SaveIndicator,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn with_details(mut self, details: &HashMap<String, String>) -> Self {
        if !details.is_empty() {
            self.details = serde_json::to_value(details).ok();
        }
        self
    }
}
