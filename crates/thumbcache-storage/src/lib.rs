//! Thumbcache Storage Library
//!
//! Blob-store abstraction and implementations. The `Storage` trait models the
//! external collaborator the cache protocol needs: async get/put/exists of
//! named byte blobs in named buckets, failing with `NotFound` or backend
//! errors.
//!
//! Key construction is not this crate's concern; the key codec lives in
//! `thumbcache_core::keys` and callers pass fully-formed keys here.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use thumbcache_core::StorageBackend;
pub use traits::{Storage, StorageError, StorageResult};
