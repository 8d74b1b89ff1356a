//! Core error types for got-core.
//!
//! Lookups of unknown characters are not errors in the core: they produce
//! empty results. The only failure is a projection that cannot color a node.

use thiserror::Error;

/// Errors produced by the got-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A node's gender has no entry in the visual style's color map.
    #[error("no color mapped for gender '{gender}'")]
    UnmappedGender { gender: String },
}
