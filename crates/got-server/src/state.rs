//! Shared application state for the axum server.
//!
//! [`AppState`] holds the read-only whole graph plus the session registry.
//! It is `Clone` (required by axum) and every field is behind an `Arc`.

use std::sync::Arc;
use std::time::Duration;

use got_core::{GraphSession, GraphSnapshot, NoPortraits, PortraitDir, PortraitSource, VisualStyle};
use got_data::{DataError, DatasetSource, SqliteDataset};
use tokio::sync::Mutex;

use crate::config::{DatasetLocation, ServerConfig};
use crate::error::ApiError;
use crate::sessions::{SessionId, SessionRegistry};

/// How often the idle-session sweep runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The full dataset. Never mutated after startup.
    pub whole: Arc<GraphSnapshot>,
    /// Live dashboard sessions.
    pub sessions: Arc<SessionRegistry>,
    pub style: Arc<VisualStyle>,
    pub portraits: Arc<dyn PortraitSource + Send + Sync>,
}

impl AppState {
    /// Loads the dataset named by `config` and starts the idle-session sweep.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &ServerConfig) -> Result<Self, DataError> {
        let whole = match &config.dataset {
            DatasetLocation::Csv { nodes, edges } => got_data::load_csv(nodes, edges)?,
            DatasetLocation::Sqlite { path } => SqliteDataset::open(path)?.load()?,
        };

        let mut state = Self::from_snapshot(whole);
        state.portraits = Arc::new(PortraitDir::new(&config.image_dir));
        state
            .sessions
            .start_inactivity_sweep(SWEEP_INTERVAL, config.session_ttl);
        Ok(state)
    }

    /// Builds state around an already loaded whole graph, without portraits
    /// or background tasks.
    pub fn from_snapshot(whole: GraphSnapshot) -> Self {
        AppState {
            whole: Arc::new(whole),
            sessions: Arc::new(SessionRegistry::new()),
            style: Arc::new(VisualStyle::default()),
            portraits: Arc::new(NoPortraits),
        }
    }

    /// Starts a new dashboard session over a private copy of the whole graph.
    pub fn open_session(&self) -> (SessionId, Arc<Mutex<GraphSession>>) {
        let (id, session) = self
            .sessions
            .create(GraphSession::new(self.whole.as_ref().clone()));
        tracing::info!(session = %id, active = self.sessions.len(), "session opened");
        (id, session)
    }

    /// Looks up a session by its textual id.
    pub fn session(&self, raw_id: &str) -> Result<(SessionId, Arc<Mutex<GraphSession>>), ApiError> {
        let id = parse_session_id(raw_id)?;
        let session = self
            .sessions
            .get(&id)
            .ok_or_else(|| ApiError::NotFound(format!("session {} not found", id)))?;
        Ok((id, session))
    }
}

/// Parses a path segment into a [`SessionId`].
pub fn parse_session_id(raw_id: &str) -> Result<SessionId, ApiError> {
    uuid::Uuid::parse_str(raw_id)
        .map(SessionId)
        .map_err(|_| ApiError::BadRequest(format!("invalid session id '{}': expected UUID", raw_id)))
}
