//! GraphSnapshot: a node/edge table pair with derived bounds and summary.
//!
//! A snapshot owns its rows outright. Deriving one view from another is an
//! explicit [`Clone`] followed by an in-place operation, so no snapshot ever
//! aliases another's tables.
//!
//! # Canonical form
//!
//! After every structural update a snapshot is in canonical form:
//! - nodes are unique by id and edges unique by `(from, to)`, first row wins;
//! - nodes are sorted by screentime descending, then id ascending;
//! - edges are sorted by weight descending, then `(from, to)` ascending;
//! - bounds and summary reflect exactly the current rows.
//!
//! Referential integrity (every edge endpoint is a node of the snapshot) can
//! be broken between the steps of [`GraphSnapshot::filter`] but holds again
//! once it returns.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::criteria::FilterCriteria;
use crate::edge::{Edge, EdgeKey};
use crate::id::NodeId;
use crate::node::Node;
use crate::scale::{GraphBounds, ScaleBounds, EDGE_WIDTH_RANGE, NODE_SIZE_RANGE};
use crate::summary::{GraphSummary, SummaryRow};

/// One version of the character network.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GraphSnapshot {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    bounds: GraphBounds,
    /// `None` only for the "no data" sentinel.
    summary: Option<GraphSummary>,
}

impl GraphSnapshot {
    /// Builds a snapshot from raw rows, deduplicating and sorting them.
    pub fn new(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Self {
        let mut snapshot = GraphSnapshot {
            nodes: dedup_nodes(nodes),
            edges: dedup_edges(edges),
            bounds: GraphBounds::default(),
            summary: None,
        };
        snapshot.recompute();
        snapshot
    }

    /// The "no data" sentinel: no rows, zero bounds, no summary rows.
    pub fn empty() -> Self {
        GraphSnapshot::default()
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id.as_str() == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Returns `true` for the sentinel produced by [`GraphSnapshot::empty`].
    pub fn is_sentinel(&self) -> bool {
        self.summary.is_none()
    }

    /// Node ids in canonical order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|n| &n.id)
    }

    /// Distinct genders in canonical node order.
    pub fn genders(&self) -> IndexSet<String> {
        self.nodes.iter().map(|n| n.gender.clone()).collect()
    }

    pub fn screentime_bounds(&self) -> ScaleBounds {
        self.bounds.screentime
    }

    pub fn edge_weight_bounds(&self) -> ScaleBounds {
        self.bounds.edge_weight
    }

    pub fn bounds(&self) -> GraphBounds {
        self.bounds
    }

    pub fn summary(&self) -> Option<&GraphSummary> {
        self.summary.as_ref()
    }

    /// All summary rows; empty for the sentinel.
    pub fn summary_table(&self) -> Vec<SummaryRow> {
        self.summary.as_ref().map(GraphSummary::rows).unwrap_or_default()
    }

    /// Summary rows shown in the dashboard table; empty for the sentinel.
    pub fn display_summary_table(&self) -> Vec<SummaryRow> {
        self.summary
            .as_ref()
            .map(GraphSummary::display_rows)
            .unwrap_or_default()
    }

    /// Returns `true` if every edge endpoint is a node of this snapshot.
    pub fn is_consistent(&self) -> bool {
        let ids = self.id_set();
        self.edges
            .iter()
            .all(|e| ids.contains(e.from.as_str()) && ids.contains(e.to.as_str()))
    }

    pub fn size_description(&self) -> String {
        format!(
            "Number of nodes: {}, Number of edges: {}",
            self.nodes.len(),
            self.edges.len()
        )
    }

    // -----------------------------------------------------------------------
    // Scaling
    // -----------------------------------------------------------------------

    /// Node size for `screentime`, scaled over this snapshot's bounds.
    pub fn node_size(&self, screentime: f64) -> f64 {
        self.bounds.screentime.scale(screentime, NODE_SIZE_RANGE)
    }

    /// Edge width for `weight`, scaled over this snapshot's bounds.
    pub fn edge_width(&self, weight: f64) -> f64 {
        self.bounds.edge_weight.scale(weight, EDGE_WIDTH_RANGE)
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Narrows the snapshot to rows matching `criteria`.
    ///
    /// Screentime is applied before gender so that edge repair runs after
    /// each node pass; the weight threshold comes last.
    pub fn filter(&mut self, criteria: &FilterCriteria) {
        self.nodes.retain(|n| n.screentime >= criteria.min_screentime);
        self.remove_dangling_edges();

        self.nodes.retain(|n| criteria.includes_gender(&n.gender));
        self.remove_dangling_edges();

        self.edges.retain(|e| e.weight >= criteria.min_edge_weight);

        self.recompute();
    }

    /// Returns the `n_hops` neighborhood of `node_id` as a new snapshot.
    ///
    /// Each round adds every edge touching the current id set and then every
    /// node those edges reference. An unknown id yields an empty snapshot.
    pub fn neighborhood_around_node(&self, node_id: &str, n_hops: u32) -> GraphSnapshot {
        let mut ids: HashSet<&str> = self
            .nodes
            .iter()
            .filter(|n| n.id.as_str() == node_id)
            .map(|n| n.id.as_str())
            .collect();

        let mut included = vec![false; self.edges.len()];
        for _ in 0..n_hops {
            let frontier: Vec<usize> = self
                .edges
                .iter()
                .enumerate()
                .filter(|(i, e)| {
                    !included[*i]
                        && (ids.contains(e.from.as_str()) || ids.contains(e.to.as_str()))
                })
                .map(|(i, _)| i)
                .collect();

            // A round that adds no edge adds no id either; later rounds repeat it.
            if frontier.is_empty() {
                break;
            }
            for i in frontier {
                included[i] = true;
                let edge = &self.edges[i];
                ids.insert(edge.from.as_str());
                ids.insert(edge.to.as_str());
            }
        }

        let nodes = self
            .nodes
            .iter()
            .filter(|n| ids.contains(n.id.as_str()))
            .cloned()
            .collect::<Vec<_>>();
        let edges = self
            .edges
            .iter()
            .zip(&included)
            .filter(|(_, keep)| **keep)
            .map(|(e, _)| e.clone())
            .collect::<Vec<_>>();

        GraphSnapshot::new(nodes, edges)
    }

    /// Merges `other` into this snapshot.
    ///
    /// Rows already present win over `other`'s rows with the same key.
    /// Edges whose endpoints are not both in the merged node set are dropped.
    pub fn append_graph(&mut self, other: &GraphSnapshot) {
        let nodes = std::mem::take(&mut self.nodes)
            .into_iter()
            .chain(other.nodes.iter().cloned());
        let edges = std::mem::take(&mut self.edges)
            .into_iter()
            .chain(other.edges.iter().cloned());

        self.nodes = dedup_nodes(nodes);
        self.edges = dedup_edges(edges);
        self.remove_dangling_edges();
        self.recompute();
    }

    /// Removes `node_id` and every edge touching it.
    ///
    /// Returns `true` if the node was present.
    pub fn delete_node_from_graph(&mut self, node_id: &str) -> bool {
        let node_count = self.nodes.len();
        let edge_count = self.edges.len();

        self.nodes.retain(|n| n.id.as_str() != node_id);
        self.edges.retain(|e| !e.touches(node_id));

        let removed = self.nodes.len() != node_count;
        if removed || self.edges.len() != edge_count {
            self.recompute();
        }
        removed
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn id_set(&self) -> HashSet<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    fn remove_dangling_edges(&mut self) {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .retain(|e| ids.contains(e.from.as_str()) && ids.contains(e.to.as_str()));
    }

    /// Restores canonical order and recomputes bounds and summary.
    fn recompute(&mut self) {
        self.nodes.sort_by(|a, b| {
            b.screentime
                .total_cmp(&a.screentime)
                .then_with(|| a.id.cmp(&b.id))
        });
        self.edges.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| (&a.from, &a.to).cmp(&(&b.from, &b.to)))
        });

        self.bounds = GraphBounds {
            screentime: ScaleBounds::from_values(self.nodes.iter().map(|n| n.screentime)),
            edge_weight: ScaleBounds::from_values(self.edges.iter().map(|e| e.weight)),
        };
        self.summary = Some(GraphSummary::compute(&self.nodes, &self.edges));
    }
}

fn dedup_nodes(nodes: impl IntoIterator<Item = Node>) -> Vec<Node> {
    let mut by_id: IndexMap<NodeId, Node> = IndexMap::new();
    for node in nodes {
        by_id.entry(node.id.clone()).or_insert(node);
    }
    by_id.into_values().collect()
}

fn dedup_edges(edges: impl IntoIterator<Item = Edge>) -> Vec<Edge> {
    let mut by_key: IndexMap<EdgeKey, Edge> = IndexMap::new();
    for edge in edges {
        by_key.entry(edge.key()).or_insert(edge);
    }
    by_key.into_values().collect()
}
