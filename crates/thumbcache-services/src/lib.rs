//! Thumbcache Services Library
//!
//! The resize-on-demand cache orchestrator: decides, for each (file, size)
//! request, whether to serve the cold original, a cached variant, or to
//! generate and persist a new variant.

pub mod resize_cache;

pub use resize_cache::ResizeCacheService;
