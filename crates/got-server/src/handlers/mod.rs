//! HTTP handler modules for the dashboard API.
//!
//! Handlers parse the request, lock the addressed session, delegate to
//! [`GraphSession`](got_core::GraphSession) or the dispatcher, and return
//! JSON responses. No graph logic lives in handlers.

pub mod events;
pub mod sessions;
