//! HTTP DTOs for scoring endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::scoring::Point;

/// POST /api/scoring/target
///
/// Scores the placement at `(x, y)`. When `relevance` is given the placement
/// is instead moved along its own angle to produce that relevance.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetRequest {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub relevance: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetResponse {
    pub relevance: u8,
    pub position: Point,
}

/// POST /api/scoring/radar
#[derive(Debug, Clone, Deserialize)]
pub struct RadarRequest {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarResponse {
    pub confidence: f64,
    pub level: u8,
    pub position: Point,
}

/// GET /api/scoring/settings
///
/// What a client needs to run the widgets the same way the server scores them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringSettingsResponse {
    pub radius: f64,
    pub drag_threshold_px: f64,
}
