// HTTP routes

mod http;

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::presenter::StatusPresenter;
use crate::session::SessionRegistry;

/// Header carrying the browsing session id.
pub const SESSION_HEADER: &str = "x-session-id";
/// Session used when the header is missing.
pub const DEFAULT_SESSION: &str = "default";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) presenter: Arc<StatusPresenter>,
    pub(crate) sessions: Arc<SessionRegistry>,
}

pub fn app(presenter: Arc<StatusPresenter>, sessions: Arc<SessionRegistry>) -> Router {
    let state = AppState {
        presenter,
        sessions,
    };
    Router::new()
        .route("/", get(|| async { "statusboard is up" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/status", get(http::status_handler)) // GET /api/status
        .route("/api/status/raw", get(http::raw_status_handler)) // GET /api/status/raw
        .route(
            "/api/status/command-line",
            get(http::command_line_handler),
        ) // GET /api/status/command-line
        .route(
            "/api/status/command-line/toggle",
            post(http::toggle_command_line_handler),
        ) // POST /api/status/command-line/toggle
        .route("/api/session", delete(http::end_session_handler)) // DELETE /api/session
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
