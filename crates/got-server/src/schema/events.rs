//! Schema types for the event endpoint.
//!
//! The request body is a [`DashboardEvent`](crate::dispatch::DashboardEvent)
//! tagged by its `type` field.

use got_core::{GraphPayload, SummaryRow};
use serde::Serialize;

/// State of the dashboard after an event was applied.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub graph: GraphPayload,
    pub summary: Vec<SummaryRow>,
    /// Page the client should open, for wiki events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_url: Option<String>,
}
