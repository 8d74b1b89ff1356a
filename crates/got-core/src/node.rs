//! Character nodes.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// A character in the network.
///
/// `gender` is kept as the raw categorical string from the dataset so that
/// any observed value can flow through filtering; the visual projection is
/// where an unknown value becomes an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub gender: String,
    pub screentime: f64,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, gender: impl Into<String>, screentime: f64) -> Self {
        Node {
            id: id.into(),
            gender: gender.into(),
            screentime,
        }
    }
}
