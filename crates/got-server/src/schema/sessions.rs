//! Schema types for session lifecycle and read-only views.

use got_core::{DropdownOption, GraphPayload, SummaryRow};
use serde::Serialize;
use uuid::Uuid;

/// Response after opening a dashboard session.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    /// Character picker entries, in canonical order.
    pub options: Vec<DropdownOption>,
    /// Initial display payload (empty until a search is submitted).
    pub graph: GraphPayload,
    pub summary: Vec<SummaryRow>,
}

/// Response after closing a session.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteSessionResponse {
    pub success: bool,
    pub session_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub rows: Vec<SummaryRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionsResponse {
    pub options: Vec<DropdownOption>,
}
