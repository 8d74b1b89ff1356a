//! Row validation applied to every dataset before it becomes a snapshot.

use std::collections::{HashMap, HashSet};

use got_core::{Edge, EdgeKey, Node};

use crate::error::DataError;

/// Checks value domains and key uniqueness.
///
/// Exact duplicate rows are allowed (the snapshot folds them); node rows
/// that share an id, or edge rows that share `(from, to)`, but differ are
/// rejected.
pub fn validate_tables(nodes: &[Node], edges: &[Edge]) -> Result<(), DataError> {
    let mut seen: HashMap<&str, &Node> = HashMap::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        check_amount("nodes", i + 1, "screentime", node.screentime)?;
        if let Some(prev) = seen.insert(node.id.as_str(), node) {
            if prev != node {
                return Err(DataError::ConflictingNode {
                    id: node.id.to_string(),
                });
            }
        }
    }
    let mut seen: HashMap<EdgeKey, &Edge> = HashMap::with_capacity(edges.len());
    for (i, edge) in edges.iter().enumerate() {
        check_amount("edges", i + 1, "weight", edge.weight)?;
        if let Some(prev) = seen.insert(edge.key(), edge) {
            if prev != edge {
                return Err(DataError::ConflictingEdge {
                    from: edge.from.to_string(),
                    to: edge.to.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Drops edges whose endpoints are not node ids, returning how many went.
pub fn drop_dangling_edges(nodes: &[Node], edges: Vec<Edge>) -> (Vec<Edge>, usize) {
    let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let before = edges.len();
    let kept: Vec<Edge> = edges
        .into_iter()
        .filter(|e| ids.contains(e.from.as_str()) && ids.contains(e.to.as_str()))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

fn check_amount(
    table: &'static str,
    row: usize,
    column: &str,
    value: f64,
) -> Result<(), DataError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DataError::InvalidValue {
            table,
            row,
            reason: format!("{column} must be a non-negative number, got {value}"),
        });
    }
    Ok(())
}
