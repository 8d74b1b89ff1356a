//! GraphSession: the whole / filtered / display snapshot triple of one
//! dashboard.
//!
//! The session is the only thing the interaction layer mutates. `whole` is
//! fixed at construction; `filtered` is always `whole` narrowed by the
//! current criteria; `display` is what gets rendered.
//!
//! ```text
//! Loaded ──update_filter──▶ FilterApplied ──create_display_graph…──▶ DisplayComputed
//!                                                   │
//!                          add_subgraph / expand / delete ──▶ DisplayMutated
//! ```

use std::fmt;

use serde::Serialize;

use crate::criteria::{FilterCriteria, FilterUpdate};
use crate::error::CoreError;
use crate::projection::{project, GraphPayload, PortraitSource, VisualStyle};
use crate::snapshot::GraphSnapshot;
use crate::summary::SummaryRow;

/// Hops used when a node is expanded by clicking it.
pub const EXPAND_HOPS: u32 = 1;

/// An entry of the character selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// State of one dashboard.
#[derive(Debug, Clone)]
pub struct GraphSession {
    whole: GraphSnapshot,
    filtered: GraphSnapshot,
    display: GraphSnapshot,
    criteria: FilterCriteria,
}

impl GraphSession {
    /// Creates a session over a loaded dataset.
    ///
    /// Criteria start permissive, so `filtered` equals `whole`; `display`
    /// starts as the "no data" sentinel.
    pub fn new(whole: GraphSnapshot) -> Self {
        let criteria = FilterCriteria::permit_all(whole.genders());
        tracing::debug!(
            nodes = whole.node_count(),
            edges = whole.edge_count(),
            "graph session created"
        );
        GraphSession {
            filtered: whole.clone(),
            display: GraphSnapshot::empty(),
            whole,
            criteria,
        }
    }

    pub fn whole(&self) -> &GraphSnapshot {
        &self.whole
    }

    pub fn filtered(&self) -> &GraphSnapshot {
        &self.filtered
    }

    pub fn display(&self) -> &GraphSnapshot {
        &self.display
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Merges `update` into the criteria and rebuilds `filtered` from `whole`.
    pub fn update_filter(&mut self, update: FilterUpdate) {
        self.criteria.apply_update(update, self.whole.genders());

        let mut filtered = self.whole.clone();
        filtered.filter(&self.criteria);
        self.filtered = filtered;

        tracing::debug!(
            min_screentime = self.criteria.min_screentime,
            min_edge_weight = self.criteria.min_edge_weight,
            nodes = self.filtered.node_count(),
            edges = self.filtered.edge_count(),
            "filter applied"
        );
    }

    /// Replaces `display` with the neighborhood of `node_id` in `filtered`.
    ///
    /// `None` hops means zero: the node alone.
    pub fn create_display_graph_from_node_neighborhood(
        &mut self,
        node_id: &str,
        n_hops: Option<u32>,
    ) {
        let hops = n_hops.unwrap_or(0);
        self.display = self.filtered.neighborhood_around_node(node_id, hops);
        tracing::debug!(
            node = node_id,
            hops,
            nodes = self.display.node_count(),
            "display graph computed"
        );
    }

    /// Filters `subgraph` by the current criteria and merges it into
    /// `display`. Repeated calls only ever grow `display`.
    pub fn add_subgraph_to_displaygraph(&mut self, mut subgraph: GraphSnapshot) {
        subgraph.filter(&self.criteria);
        self.display.append_graph(&subgraph);
    }

    /// Adds the one-hop neighborhood of `node_id` in `whole` to `display`.
    pub fn expand_display_node(&mut self, node_id: &str) {
        let egonet = self.whole.neighborhood_around_node(node_id, EXPAND_HOPS);
        self.add_subgraph_to_displaygraph(egonet);
        tracing::debug!(
            node = node_id,
            nodes = self.display.node_count(),
            "display node expanded"
        );
    }

    /// Removes `node_id` and its edges from `display`.
    pub fn delete_node_from_display_graph(&mut self, node_id: &str) -> bool {
        let removed = self.display.delete_node_from_graph(node_id);
        tracing::debug!(node = node_id, removed, "display node deleted");
        removed
    }

    /// Every character of the dataset in canonical order.
    pub fn get_options_for_dropdown(&self) -> Vec<DropdownOption> {
        self.whole
            .node_ids()
            .map(|id| DropdownOption {
                label: id.to_string(),
                value: id.to_string(),
            })
            .collect()
    }

    /// Statistics rows of `display` for the summary table.
    pub fn display_summary_table(&self) -> Vec<SummaryRow> {
        self.display.display_summary_table()
    }

    /// Renderer payload of `display`, scaled against `whole`.
    pub fn project_display(
        &self,
        style: &VisualStyle,
        portraits: &dyn PortraitSource,
    ) -> Result<GraphPayload, CoreError> {
        project(&self.display, &self.whole.bounds(), style, portraits)
    }
}

impl fmt::Display for GraphSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph_whole:    {}", self.whole.size_description())?;
        writeln!(f, "graph_filtered: {}", self.filtered.size_description())?;
        write!(f, "graph_display:  {}", self.display.size_description())
    }
}
