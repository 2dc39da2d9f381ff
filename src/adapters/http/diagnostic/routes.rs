//! HTTP routes for diagnostic endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    advance, back, enter_module, exit_module, get_dashboard, get_module, logout, open_module,
    replace_answers, submit_for_review, DiagnosticAppState,
};

/// Creates the diagnostic router with all routes.
pub fn diagnostic_routes(state: DiagnosticAppState) -> Router {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/modules/:module", get(get_module))
        // Navigation
        .route("/api/modules/:module/enter", post(enter_module))
        .route("/api/modules/:module/open", post(open_module))
        .route("/api/modules/:module/exit", post(exit_module))
        // Wizard
        .route("/api/modules/:module/answers", put(replace_answers))
        .route("/api/modules/:module/advance", post(advance))
        .route("/api/modules/:module/back", post(back))
        .route("/api/modules/:module/submit", post(submit_for_review))
        .route("/api/logout", post(logout))
        .with_state(state)
}
