//! HTTP routes for scoring endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_settings, score_radar, score_target, ScoringAppState};

pub fn scoring_routes(state: ScoringAppState) -> Router {
    Router::new()
        .route("/api/scoring/settings", get(get_settings))
        .route("/api/scoring/target", post(score_target))
        .route("/api/scoring/radar", post(score_radar))
        .with_state(state)
}
