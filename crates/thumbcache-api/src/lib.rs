//! Thumbcache API
//!
//! HTTP transport adapter for the resize-on-demand cache: router, handlers,
//! error mapping and server startup. The handlers translate HTTP requests
//! into normalized `ImageRequest`s and render the orchestrator's responses.

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
