//! Dashboard event handler.

use axum::extract::{Path, State};
use axum::Json;

use crate::dispatch::{dispatch, DashboardEvent};
use crate::error::ApiError;
use crate::schema::events::EventResponse;
use crate::state::AppState;

/// `POST /sessions/{id}/events`
///
/// Applies one event and returns the resulting display graph and summary.
pub async fn post_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(event): Json<DashboardEvent>,
) -> Result<Json<EventResponse>, ApiError> {
    let (session_id, session) = state.session(&id)?;
    let mut session = session.lock().await;

    let kind = event.kind();
    let outcome = dispatch(&mut session, event);
    tracing::info!(
        session = %session_id,
        event = kind,
        nodes = session.display().node_count(),
        edges = session.display().edge_count(),
        "event applied"
    );

    Ok(Json(EventResponse {
        graph: session.project_display(&state.style, &*state.portraits)?,
        summary: session.display_summary_table(),
        open_url: outcome.open_url,
    }))
}
