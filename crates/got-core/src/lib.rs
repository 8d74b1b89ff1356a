//! In-memory engine of the Game of Thrones network dashboard.
//!
//! A [`GraphSnapshot`] is one version of the character network; a
//! [`GraphSession`] holds the whole / filtered / display snapshots of one
//! dashboard and applies user actions to them; [`projection`] turns a
//! snapshot into the payload the renderer consumes.

pub mod criteria;
pub mod edge;
pub mod error;
pub mod id;
pub mod node;
pub mod projection;
pub mod scale;
pub mod session;
pub mod snapshot;
pub mod summary;

// Re-export commonly used types
pub use criteria::{FilterCriteria, FilterUpdate};
pub use edge::{Edge, EdgeKey};
pub use error::CoreError;
pub use id::NodeId;
pub use node::Node;
pub use projection::{project, GraphPayload, NoPortraits, PortraitDir, PortraitSource, VisualStyle};
pub use scale::{GraphBounds, ScaleBounds, SizeRange};
pub use session::{DropdownOption, GraphSession};
pub use snapshot::GraphSnapshot;
pub use summary::{GraphSummary, SummaryRow, SummaryValue};
