//! Session lifecycle and read-only view handlers.

use axum::extract::{Path, State};
use axum::Json;

use got_core::GraphPayload;

use crate::error::ApiError;
use crate::schema::sessions::{
    CreateSessionResponse, DeleteSessionResponse, OptionsResponse, SummaryResponse,
};
use crate::state::{parse_session_id, AppState};

/// `POST /sessions`
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<CreateSessionResponse>, ApiError> {
    let (id, session) = state.open_session();
    let session = session.lock().await;

    Ok(Json(CreateSessionResponse {
        session_id: id.0,
        options: session.get_options_for_dropdown(),
        graph: session.project_display(&state.style, &*state.portraits)?,
        summary: session.display_summary_table(),
    }))
}

/// `DELETE /sessions/{id}`
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteSessionResponse>, ApiError> {
    let id = parse_session_id(&id)?;
    if !state.sessions.remove(&id) {
        return Err(ApiError::NotFound(format!("session {} not found", id)));
    }
    tracing::info!(session = %id, active = state.sessions.len(), "session closed");

    Ok(Json(DeleteSessionResponse {
        success: true,
        session_id: id.0,
    }))
}

/// `GET /sessions/{id}/graph`
pub async fn get_graph(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GraphPayload>, ApiError> {
    let (_, session) = state.session(&id)?;
    let session = session.lock().await;
    Ok(Json(session.project_display(&state.style, &*state.portraits)?))
}

/// `GET /sessions/{id}/summary`
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let (_, session) = state.session(&id)?;
    let session = session.lock().await;
    Ok(Json(SummaryResponse {
        rows: session.display_summary_table(),
    }))
}

/// `GET /sessions/{id}/options`
pub async fn get_options(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OptionsResponse>, ApiError> {
    let (_, session) = state.session(&id)?;
    let session = session.lock().await;
    Ok(Json(OptionsResponse {
        options: session.get_options_for_dropdown(),
    }))
}
