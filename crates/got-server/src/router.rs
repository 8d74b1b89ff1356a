//! Router assembly for the dashboard HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(handlers::sessions::create_session))
        .route(
            "/sessions/{id}",
            axum::routing::delete(handlers::sessions::delete_session),
        )
        .route("/sessions/{id}/graph", get(handlers::sessions::get_graph))
        .route("/sessions/{id}/summary", get(handlers::sessions::get_summary))
        .route("/sessions/{id}/options", get(handlers::sessions::get_options))
        .route("/sessions/{id}/events", post(handlers::events::post_event))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
