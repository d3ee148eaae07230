// Handlers: version, status, raw snapshot, command-line order, session

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::warn;

use super::{AppState, DEFAULT_SESSION, SESSION_HEADER};
use crate::source::SourceError;
use crate::version::{NAME, VERSION};

/// A failed fetch from the status source.
pub(super) struct ApiError(SourceError);

impl From<SourceError> for ApiError {
    fn from(e: SourceError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("status fetch failed: {}", self.0);
        (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

fn session_id(headers: &HeaderMap) -> &str {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SESSION)
}

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/status — reloads and returns the display metrics for the session.
pub(super) async fn status_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.sessions.get(session_id(&headers)).unwrap_or_default();
    let metrics = state.presenter.reload(session.as_ref()).await?;
    Ok(Json(metrics))
}

/// GET /api/status/raw — the last applied snapshot, reloading if there is none yet.
pub(super) async fn raw_status_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(snapshot) = state.presenter.latest_snapshot() {
        return Ok(Json(snapshot.as_ref().clone()));
    }
    let session = state.sessions.get(session_id(&headers)).unwrap_or_default();
    state.presenter.reload(session.as_ref()).await?;
    let snapshot = state.presenter.latest_snapshot().unwrap_or_default();
    Ok(Json(snapshot.as_ref().clone()))
}

/// GET /api/status/command-line — arguments of the latest snapshot in the session's order.
pub(super) async fn command_line_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let session = state.sessions.get(session_id(&headers)).unwrap_or_default();
    Json(state.presenter.command_line(session.as_ref()))
}

/// POST /api/status/command-line/toggle — flips the session's argument order.
pub(super) async fn toggle_command_line_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let session = state.sessions.session(session_id(&headers));
    Json(state.presenter.toggle_command_line_order(session.as_ref()))
}

/// DELETE /api/session — ends the session and forgets its preferences.
pub(super) async fn end_session_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if state.sessions.end(session_id(&headers)) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
