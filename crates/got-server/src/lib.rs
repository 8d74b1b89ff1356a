//! HTTP/JSON server for the Game of Thrones network dashboard.
//!
//! Each dashboard tab opens a session, then posts UI events to it; every
//! response carries the projected display graph and its summary table.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod sessions;
pub mod state;
