//! HTTP handlers for scoring endpoints.
//!
//! Stateless helpers so a client can delegate the placement formulas and
//! share the gesture settings of this deployment.

use axum::extract::{Json, State};

use super::dto::{
    RadarRequest, RadarResponse, ScoringSettingsResponse, TargetRequest, TargetResponse,
};
use crate::domain::scoring::{
    PositionalBoard, Point, Positioned, RadarScale, Surface, TargetScale,
    DEFAULT_DRAG_THRESHOLD_PX,
};

/// Scales and gesture settings configured for this deployment.
#[derive(Debug, Clone, Copy)]
pub struct ScoringAppState {
    pub target: TargetScale,
    pub radar: RadarScale,
    pub drag_threshold_px: f64,
}

impl ScoringAppState {
    pub fn new(target: TargetScale, radar: RadarScale, drag_threshold_px: f64) -> Self {
        Self {
            target,
            radar,
            drag_threshold_px,
        }
    }

    /// Board over `items` using the configured radius and drag threshold.
    pub fn board<T: Positioned>(&self, items: Vec<T>, surface: Surface) -> PositionalBoard<T> {
        PositionalBoard::with_settings(
            items,
            surface,
            self.target.radius(),
            self.drag_threshold_px,
        )
    }
}

impl Default for ScoringAppState {
    fn default() -> Self {
        Self::new(
            TargetScale::default(),
            RadarScale::default(),
            DEFAULT_DRAG_THRESHOLD_PX,
        )
    }
}

/// GET /api/scoring/settings
pub async fn get_settings(State(state): State<ScoringAppState>) -> Json<ScoringSettingsResponse> {
    Json(ScoringSettingsResponse {
        radius: state.target.radius(),
        drag_threshold_px: state.drag_threshold_px,
    })
}

/// POST /api/scoring/target
pub async fn score_target(
    State(state): State<ScoringAppState>,
    Json(req): Json<TargetRequest>,
) -> Json<TargetResponse> {
    let placed = Point::new(req.x, req.y);
    let position = match req.relevance {
        Some(relevance) => state.target.reposition(placed, relevance),
        None => state.target.clamp(placed),
    };

    Json(TargetResponse {
        relevance: state.target.relevance_at(position),
        position,
    })
}

/// POST /api/scoring/radar
pub async fn score_radar(
    State(state): State<ScoringAppState>,
    Json(req): Json<RadarRequest>,
) -> Json<RadarResponse> {
    let placed = Point::new(req.x, req.y);
    let position = match req.confidence {
        Some(confidence) => state.radar.reposition(placed, confidence),
        None => state.radar.clamp(placed),
    };

    Json(RadarResponse {
        confidence: state.radar.confidence_at(position),
        level: state.radar.confidence_level(position),
        position,
    })
}
