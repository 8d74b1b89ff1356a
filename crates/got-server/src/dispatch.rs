//! Dashboard events and their dispatch onto a [`GraphSession`].
//!
//! Each UI interaction arrives as one [`DashboardEvent`]; [`dispatch`] maps it
//! to exactly one session operation.

use got_core::{FilterUpdate, GraphSession, NodeId};
use serde::{Deserialize, Serialize};

const WIKI_BASE_URL: &str = "https://gameofthrones.fandom.com/wiki/";

/// A user interaction with the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DashboardEvent {
    /// The filter form was submitted.
    ///
    /// Unset thresholds keep their previous value. The display graph becomes
    /// the `num_hops` neighborhood of `search_node_id` in the filtered graph.
    SubmitFilter {
        #[serde(default)]
        min_screentime: Option<f64>,
        #[serde(default)]
        min_edge_weight: Option<f64>,
        #[serde(default)]
        node_types: Option<Vec<String>>,
        #[serde(default)]
        search_node_id: Option<String>,
        #[serde(default)]
        num_hops: Option<u32>,
    },
    /// Add a node's direct neighbors to the display graph.
    ExpandNode { node_id: String },
    /// Remove a node from the display graph.
    DeleteNode { node_id: String },
    /// Open the character's wiki page. Leaves the session untouched.
    OpenWiki { node_id: String },
    NoOp,
}

impl DashboardEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardEvent::SubmitFilter { .. } => "submit_filter",
            DashboardEvent::ExpandNode { .. } => "expand_node",
            DashboardEvent::DeleteNode { .. } => "delete_node",
            DashboardEvent::OpenWiki { .. } => "open_wiki",
            DashboardEvent::NoOp => "no_op",
        }
    }
}

/// Side effects the client should perform after an event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchOutcome {
    pub open_url: Option<String>,
}

/// Applies `event` to `session`.
pub fn dispatch(session: &mut GraphSession, event: DashboardEvent) -> DispatchOutcome {
    tracing::debug!(event = event.kind(), "dispatching dashboard event");

    match event {
        DashboardEvent::SubmitFilter {
            min_screentime,
            min_edge_weight,
            node_types,
            search_node_id,
            num_hops,
        } => {
            session.update_filter(FilterUpdate {
                min_screentime,
                min_edge_weight,
                node_types_to_include: node_types,
            });
            // No search id selects no node, so the display graph is cleared.
            let seed = search_node_id.unwrap_or_default();
            session.create_display_graph_from_node_neighborhood(&seed, num_hops);
            DispatchOutcome::default()
        }
        DashboardEvent::ExpandNode { node_id } => {
            session.expand_display_node(&node_id);
            DispatchOutcome::default()
        }
        DashboardEvent::DeleteNode { node_id } => {
            session.delete_node_from_display_graph(&node_id);
            DispatchOutcome::default()
        }
        DashboardEvent::OpenWiki { node_id } => DispatchOutcome {
            open_url: Some(wiki_url_for(&NodeId::new(node_id))),
        },
        DashboardEvent::NoOp => DispatchOutcome::default(),
    }
}

/// Fandom wiki page of a character: dashes in the id become underscores.
pub fn wiki_url_for(id: &NodeId) -> String {
    format!("{WIKI_BASE_URL}{}", id.as_str().replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use got_core::{Edge, GraphSnapshot, Node};
    use std::collections::BTreeSet;

    fn session() -> GraphSession {
        GraphSession::new(GraphSnapshot::new(
            vec![
                Node::new("A", "male", 10.0),
                Node::new("B", "female", 20.0),
                Node::new("C", "male", 5.0),
            ],
            vec![Edge::new("A", "B", 3.0), Edge::new("B", "C", 1.0)],
        ))
    }

    fn display_ids(s: &GraphSession) -> BTreeSet<String> {
        s.display().node_ids().map(|id| id.to_string()).collect()
    }

    fn submit(search: &str, hops: u32, min_screentime: f64) -> DashboardEvent {
        DashboardEvent::SubmitFilter {
            min_screentime: Some(min_screentime),
            min_edge_weight: Some(0.0),
            node_types: None,
            search_node_id: Some(search.to_string()),
            num_hops: Some(hops),
        }
    }

    #[test]
    fn submit_filters_then_shows_neighborhood() {
        let mut s = session();
        dispatch(&mut s, submit("B", 1, 8.0));
        assert_eq!(display_ids(&s), BTreeSet::from(["A".into(), "B".into()]));
        assert_eq!(s.display().edge_count(), 1);
    }

    #[test]
    fn submit_without_search_clears_display() {
        let mut s = session();
        dispatch(&mut s, submit("B", 1, 0.0));
        dispatch(
            &mut s,
            DashboardEvent::SubmitFilter {
                min_screentime: None,
                min_edge_weight: None,
                node_types: None,
                search_node_id: None,
                num_hops: None,
            },
        );
        assert!(s.display().is_empty());
        assert_eq!(s.criteria().min_screentime, 0.0);
    }

    #[test]
    fn expand_and_delete() {
        let mut s = session();
        dispatch(&mut s, submit("A", 0, 0.0));
        dispatch(&mut s, DashboardEvent::ExpandNode { node_id: "A".into() });
        assert_eq!(display_ids(&s), BTreeSet::from(["A".into(), "B".into()]));

        dispatch(&mut s, DashboardEvent::DeleteNode { node_id: "A".into() });
        assert_eq!(display_ids(&s), BTreeSet::from(["B".into()]));
        assert_eq!(s.display().edge_count(), 0);
    }

    #[test]
    fn open_wiki_leaves_session_alone() {
        let mut s = session();
        dispatch(&mut s, submit("B", 1, 0.0));
        let before = s.display().clone();

        let outcome = dispatch(&mut s, DashboardEvent::OpenWiki { node_id: "Jon-Snow".into() });
        assert_eq!(
            outcome.open_url.as_deref(),
            Some("https://gameofthrones.fandom.com/wiki/Jon_Snow")
        );
        assert_eq!(s.display(), &before);
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: DashboardEvent =
            serde_json::from_str(r#"{"type":"ExpandNode","node_id":"Arya-Stark"}"#).unwrap();
        assert_eq!(event, DashboardEvent::ExpandNode { node_id: "Arya-Stark".into() });

        let event: DashboardEvent =
            serde_json::from_str(r#"{"type":"SubmitFilter","min_screentime":3.5}"#).unwrap();
        assert!(matches!(
            event,
            DashboardEvent::SubmitFilter { min_screentime: Some(m), search_node_id: None, .. } if m == 3.5
        ));

        let event: DashboardEvent = serde_json::from_str(r#"{"type":"NoOp"}"#).unwrap();
        assert_eq!(event, DashboardEvent::NoOp);
    }
}
