//! The [`DatasetSource`] trait: where the character network comes from.
//!
//! Backends only read raw rows; [`DatasetSource::load`] applies validation
//! and builds the canonical snapshot, so every backend produces identical
//! snapshots for identical rows.

use got_core::{Edge, GraphSnapshot, Node};

use crate::error::DataError;
use crate::validate::{drop_dangling_edges, validate_tables};

/// A durable store holding one node table and one edge table.
pub trait DatasetSource {
    /// Reads the raw node and edge rows.
    fn load_tables(&self) -> Result<(Vec<Node>, Vec<Edge>), DataError>;

    /// Reads, validates and canonicalizes the dataset.
    ///
    /// Edges referencing characters missing from the node table are dropped
    /// with a warning so that the whole snapshot is consistent.
    fn load(&self) -> Result<GraphSnapshot, DataError> {
        let (nodes, edges) = self.load_tables()?;
        validate_tables(&nodes, &edges)?;

        let (edges, dropped) = drop_dangling_edges(&nodes, edges);
        if dropped > 0 {
            tracing::warn!(dropped, "dropped edges referencing unknown characters");
        }

        let snapshot = GraphSnapshot::new(nodes, edges);
        tracing::info!(
            nodes = snapshot.node_count(),
            edges = snapshot.edge_count(),
            "dataset loaded"
        );
        Ok(snapshot)
    }
}
