//! HTTP handlers for diagnostic endpoints.
//!
//! These handlers connect Axum routes to the caller's `DiagnosticSession`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Json, Path, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{DiagnosticSession, SessionRegistry};
use crate::domain::answers::ModuleAnswers;
use crate::domain::foundation::{DomainError, ErrorCode, Identity, ModuleId};

use super::dto::{
    DashboardResponse, EditResponse, ErrorResponse, ModuleResponse, ModuleView,
    NavigationResponse, Route,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Diagnostic API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Domain(DomainError),
}

impl ApiError {
    fn status_for(code: ErrorCode) -> StatusCode {
        match code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::ModuleMismatch => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::ModuleLocked => StatusCode::FORBIDDEN,
            ErrorCode::ModuleNotActive
            | ErrorCode::InvalidStateTransition
            | ErrorCode::NotAtCompletion
            | ErrorCode::AlreadyAtCompletion => StatusCode::CONFLICT,
            ErrorCode::StepIncomplete => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::PersistenceError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::unauthorized(msg))
            }
            ApiError::Domain(err) => {
                let status = Self::status_for(err.code);
                if status.is_server_error() {
                    tracing::error!(code = %err.code, "{}", err.message);
                }
                (
                    status,
                    ErrorResponse::new(err.code.to_string(), err.message.clone())
                        .with_details(&err.details),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing diagnostic dependencies.
#[derive(Clone)]
pub struct DiagnosticAppState {
    pub registry: Arc<SessionRegistry>,
}

impl DiagnosticAppState {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Context
// ════════════════════════════════════════════════════════════════════════════════

/// Identity supplied by the upstream auth proxy.
#[derive(Debug, Clone)]
pub struct UserIdentity(pub Identity);

impl UserIdentity {
    pub const EMAIL_HEADER: &'static str = "x-user-email";
    pub const NAME_HEADER: &'static str = "x-user-name";
}

#[async_trait]
impl<S> FromRequestParts<S> for UserIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .map(str::to_string)
        };

        let email = header(Self::EMAIL_HEADER)
            .ok_or_else(|| ApiError::Unauthorized("Authentication is required".to_string()))?;
        let name = header(Self::NAME_HEADER).unwrap_or_default();

        Identity::new(name, email)
            .map(UserIdentity)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════════

fn parse_module(raw: &str) -> Result<ModuleId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Unknown module '{}'", raw)))
}

fn navigation(session: &DiagnosticSession, route: Route) -> NavigationResponse {
    let view = match route {
        Route::Module { module, .. } => Some(session.dashboard().view(module)),
        Route::Overview => None,
    };
    NavigationResponse { route, view }
}

fn module_response(session: &DiagnosticSession, module: ModuleId) -> ModuleResponse {
    ModuleResponse {
        view: session.dashboard().view(module),
        active: session.dashboard().active() == Some(module),
        save_indicator: session.save_indicator(module),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<DiagnosticAppState>,
    UserIdentity(identity): UserIdentity,
) -> Json<DashboardResponse> {
    let session = state.registry.session(&identity).await;
    let session = session.lock().await;

    Json(DashboardResponse {
        route: session.dashboard().route(),
        overview: session.dashboard().overview(),
    })
}

/// POST /api/modules/:module/enter
///
/// Deep-link entry: lands inside the module only if it already has progress.
pub async fn enter_module(
    State(state): State<DiagnosticAppState>,
    UserIdentity(identity): UserIdentity,
    Path(module): Path<String>,
) -> Result<Json<NavigationResponse>, ApiError> {
    let module = parse_module(&module)?;
    let session = state.registry.session(&identity).await;
    let mut session = session.lock().await;

    let route = session.route_entry(module);
    Ok(Json(navigation(&session, route)))
}

/// POST /api/modules/:module/open
pub async fn open_module(
    State(state): State<DiagnosticAppState>,
    UserIdentity(identity): UserIdentity,
    Path(module): Path<String>,
) -> Result<Json<NavigationResponse>, ApiError> {
    let module = parse_module(&module)?;
    let session = state.registry.session(&identity).await;
    let mut session = session.lock().await;

    let route = session.open_module(module)?;
    Ok(Json(navigation(&session, route)))
}

/// GET /api/modules/:module
pub async fn get_module(
    State(state): State<DiagnosticAppState>,
    UserIdentity(identity): UserIdentity,
    Path(module): Path<String>,
) -> Result<Json<ModuleResponse>, ApiError> {
    let module = parse_module(&module)?;
    let session = state.registry.session(&identity).await;
    let session = session.lock().await;

    Ok(Json(module_response(&session, module)))
}

/// PUT /api/modules/:module/answers
///
/// Body is the bare camelCase answer record of the module.
pub async fn replace_answers(
    State(state): State<DiagnosticAppState>,
    UserIdentity(identity): UserIdentity,
    Path(module): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<EditResponse>, ApiError> {
    let module = parse_module(&module)?;
    let answers = ModuleAnswers::from_json(module, body)?;

    let session = state.registry.session(&identity).await;
    let mut session = session.lock().await;

    let outcome = session.replace_answers(module, answers)?;
    Ok(Json(EditResponse {
        outcome,
        view: ModuleView::from(session.dashboard().module(module)),
        save_indicator: session.save_indicator(module),
    }))
}

/// POST /api/modules/:module/advance
pub async fn advance(
    State(state): State<DiagnosticAppState>,
    UserIdentity(identity): UserIdentity,
    Path(module): Path<String>,
) -> Result<Json<ModuleResponse>, ApiError> {
    let module = parse_module(&module)?;
    let session = state.registry.session(&identity).await;
    let mut session = session.lock().await;

    session.advance(module)?;
    Ok(Json(module_response(&session, module)))
}

/// POST /api/modules/:module/back
pub async fn back(
    State(state): State<DiagnosticAppState>,
    UserIdentity(identity): UserIdentity,
    Path(module): Path<String>,
) -> Result<Json<ModuleResponse>, ApiError> {
    let module = parse_module(&module)?;
    let session = state.registry.session(&identity).await;
    let mut session = session.lock().await;

    session.back(module)?;
    Ok(Json(module_response(&session, module)))
}

/// POST /api/modules/:module/submit
///
/// Sends the module for review from its completion view and returns to the
/// overview once the final save has been attempted.
pub async fn submit_for_review(
    State(state): State<DiagnosticAppState>,
    UserIdentity(identity): UserIdentity,
    Path(module): Path<String>,
) -> Result<Json<NavigationResponse>, ApiError> {
    let module = parse_module(&module)?;
    let session = state.registry.session(&identity).await;
    let mut session = session.lock().await;

    session.submit_for_review(module).await?;
    let route = session.dashboard().route();
    Ok(Json(navigation(&session, route)))
}

/// POST /api/modules/:module/exit
pub async fn exit_module(
    State(state): State<DiagnosticAppState>,
    UserIdentity(identity): UserIdentity,
    Path(module): Path<String>,
) -> Result<Json<NavigationResponse>, ApiError> {
    let module = parse_module(&module)?;
    let session = state.registry.session(&identity).await;
    let mut session = session.lock().await;

    if session.dashboard().active() == Some(module) {
        session.exit_module();
    }
    let route = session.dashboard().route();
    Ok(Json(navigation(&session, route)))
}

/// POST /api/logout
pub async fn logout(
    State(state): State<DiagnosticAppState>,
    UserIdentity(identity): UserIdentity,
) -> StatusCode {
    state.registry.logout(&identity).await;
    StatusCode::NO_CONTENT
}
