//! Storage abstraction trait
//!
//! This module defines the Storage trait that all blob-store backends must
//! implement.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use thumbcache_core::StorageBackend;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Unknown bucket: {0}")]
    UnknownBucket(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Blob-store abstraction.
///
/// All backends (S3, local filesystem) implement this trait, so the cache
/// orchestrator works against any of them without coupling to implementation
/// details. Keys are opaque here; the caller owns the naming scheme.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch the blob at `key` in `bucket`.
    ///
    /// Fails with `NotFound` when no blob exists at that key, or with a
    /// transport-level error otherwise.
    async fn get(&self, bucket: &str, key: &str) -> StorageResult<Bytes>;

    /// Write a blob at `key` in `bucket`, tagged with `content_type`.
    /// Overwrites any existing blob at that key; last writer wins.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<()>;

    /// Check whether a blob exists at `key` in `bucket`.
    async fn exists(&self, bucket: &str, key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
