//! Relationship edges between characters.
//!
//! Edges are directed records keyed by `(from, to)`. The dataset lists each
//! relationship once, so `A -> B` and `B -> A` are distinct keys.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// A weighted relationship between two characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// Logical key of an edge: its ordered endpoint pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }

    /// Returns `true` if either endpoint is `id`.
    pub fn touches(&self, id: &str) -> bool {
        self.from.as_str() == id || self.to.as_str() == id
    }

    /// Composite id used by renderers: `"{from}__{to}"`.
    pub fn composite_id(&self) -> String {
        format!("{}__{}", self.from, self.to)
    }
}
