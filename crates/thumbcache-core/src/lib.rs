//! Thumbcache Core Library
//!
//! This crate provides the domain models, error types, configuration, key
//! codec and dimension policy shared across all thumbcache components.

pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod policy;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, StageBuckets};
pub use error::{AppError, LogLevel};
pub use models::{ImageRequest, ImageResponse, ProxyImageResponse, SizeSpec, SizeSpecError};
pub use policy::DimensionPolicy;
pub use storage_types::StorageBackend;
