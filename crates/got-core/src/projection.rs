//! Visual projection of a snapshot into a renderer payload.
//!
//! Sizes are scaled against the bounds passed in, normally those of the
//! whole dataset, so that a character keeps the same size whichever subgraph
//! is on screen.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::NodeId;
use crate::scale::{GraphBounds, SizeRange, EDGE_WIDTH_RANGE, NODE_SIZE_RANGE};
use crate::snapshot::GraphSnapshot;

/// Placeholder shown for characters without a portrait.
pub const DEFAULT_FALLBACK_IMAGE: &str = "https://e7.pngegg.com/pngimages/549/612/png-clipart-three-headed-dragon-illustration-daenerys-targaryen-tyrion-lannister-sansa-stark-house-targaryen-house-stark-throne-miscellaneous-dragon-thumbnail.png";

const NODE_SHAPE: &str = "circularImage";

/// Renderer-independent styling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualStyle {
    pub node_size: SizeRange,
    pub edge_width: SizeRange,
    pub border_width: u32,
    /// Node color per gender. Must cover every gender that is projected.
    pub colors: IndexMap<String, String>,
    pub fallback_image: String,
}

impl Default for VisualStyle {
    fn default() -> Self {
        let mut colors = IndexMap::new();
        colors.insert("male".to_string(), "#FCFEF0".to_string());
        colors.insert("female".to_string(), "#B9540C".to_string());
        VisualStyle {
            node_size: NODE_SIZE_RANGE,
            edge_width: EDGE_WIDTH_RANGE,
            border_width: 10,
            colors,
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
        }
    }
}

/// Resolves a character id to a portrait reference.
pub trait PortraitSource {
    /// Returns the portrait reference for `id`, or `None` to use the fallback.
    fn portrait_for(&self, id: &NodeId) -> Option<String>;
}

/// Portraits stored as `<dir>/<id>.png`.
#[derive(Debug, Clone)]
pub struct PortraitDir {
    dir: PathBuf,
}

impl PortraitDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        PortraitDir { dir: dir.into() }
    }
}

impl PortraitSource for PortraitDir {
    fn portrait_for(&self, id: &NodeId) -> Option<String> {
        let path = self.dir.join(format!("{id}.png"));
        path.exists().then(|| path.to_string_lossy().into_owned())
    }
}

/// Always falls back to the placeholder image.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPortraits;

impl PortraitSource for NoPortraits {
    fn portrait_for(&self, _id: &NodeId) -> Option<String> {
        None
    }
}

/// A projected character.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePayload {
    pub id: String,
    pub label: Option<String>,
    pub image: String,
    pub shape: String,
    pub border_width: u32,
    pub size: f64,
    pub color: String,
    /// Hover tooltip.
    pub title: String,
}

/// A projected relationship.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgePayload {
    pub id: String,
    pub from: String,
    pub to: String,
    pub width: f64,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GraphPayload {
    pub nodes: Vec<NodePayload>,
    pub edges: Vec<EdgePayload>,
}

impl GraphPayload {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Projects `snapshot` using `bounds` as the scaling domain.
///
/// Fails if a node's gender has no color in `style`.
pub fn project(
    snapshot: &GraphSnapshot,
    bounds: &GraphBounds,
    style: &VisualStyle,
    portraits: &dyn PortraitSource,
) -> Result<GraphPayload, CoreError> {
    let nodes = snapshot
        .nodes()
        .iter()
        .map(|node| {
            let color = style
                .colors
                .get(&node.gender)
                .ok_or_else(|| CoreError::UnmappedGender {
                    gender: node.gender.clone(),
                })?;
            Ok(NodePayload {
                id: node.id.to_string(),
                label: None,
                image: portraits
                    .portrait_for(&node.id)
                    .unwrap_or_else(|| style.fallback_image.clone()),
                shape: NODE_SHAPE.to_string(),
                border_width: style.border_width,
                size: bounds.screentime.scale(node.screentime, style.node_size),
                color: color.clone(),
                title: format!(
                    "Name: {} <br> Gender: {} <br> Screentime: {}",
                    node.id.display_name(),
                    node.gender,
                    node.screentime
                ),
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    let edges = snapshot
        .edges()
        .iter()
        .map(|edge| EdgePayload {
            id: edge.composite_id(),
            from: edge.from.to_string(),
            to: edge.to.to_string(),
            width: bounds.edge_weight.scale(edge.weight, style.edge_width),
        })
        .collect();

    Ok(GraphPayload { nodes, edges })
}
