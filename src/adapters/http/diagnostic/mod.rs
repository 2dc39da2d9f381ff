//! Diagnostic HTTP adapter module.
//!
//! Exposes the dashboard and the four module wizards of one user.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{ApiError, DiagnosticAppState, UserIdentity};
pub use routes::diagnostic_routes;
