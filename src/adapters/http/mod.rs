//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter; `api_router` merges them behind the
//! shared middleware stack.

pub mod diagnostic;
pub mod scoring;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use diagnostic::{diagnostic_routes, DiagnosticAppState};
pub use scoring::{scoring_routes, ScoringAppState};

/// Full API router with tracing, timeout and CORS layers.
pub fn api_router(
    diagnostic: DiagnosticAppState,
    scoring: ScoringAppState,
    server: &ServerConfig,
) -> Router {
    Router::new()
        .merge(diagnostic_routes(diagnostic))
        .merge(scoring_routes(scoring))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    layer.allow_origin(origins)
}
