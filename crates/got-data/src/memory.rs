//! In-memory implementation of [`DatasetSource`].
//!
//! [`InMemoryDataset`] backs tests and embedded datasets; it goes through the
//! same validation as the file backends.

use got_core::{Edge, Node};

use crate::error::DataError;
use crate::traits::DatasetSource;

/// Rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl InMemoryDataset {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        InMemoryDataset { nodes, edges }
    }
}

impl DatasetSource for InMemoryDataset {
    fn load_tables(&self) -> Result<(Vec<Node>, Vec<Edge>), DataError> {
        Ok((self.nodes.clone(), self.edges.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_validates_rows() {
        let bad = InMemoryDataset::new(vec![Node::new("A", "male", -1.0)], Vec::new());
        assert!(bad.load().is_err());

        let good = InMemoryDataset::new(
            vec![Node::new("A", "male", 1.0), Node::new("B", "female", 3.0)],
            vec![Edge::new("A", "B", 2.0)],
        );
        let snapshot = good.load().unwrap();
        assert_eq!(snapshot.node_count(), 2);
        assert_eq!(snapshot.nodes()[0].id.as_str(), "B");
    }
}
