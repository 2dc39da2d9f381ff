//! Scoring HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ScoringAppState;
pub use routes::scoring_routes;
