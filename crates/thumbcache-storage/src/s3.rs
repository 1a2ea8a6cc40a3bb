use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectStoreExt, PutPayload, Result as ObjectResult};
use std::collections::HashMap;
use thumbcache_core::StorageBackend;

/// S3 storage implementation
///
/// `object_store` binds a client to a single bucket, so one store is built
/// per configured bucket up front; the set of buckets is fixed for the
/// process lifetime.
#[derive(Clone)]
pub struct S3Storage {
    stores: HashMap<String, AmazonS3>,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3Storage {
    /// Create a new S3Storage instance serving the given buckets.
    ///
    /// # Arguments
    /// * `buckets` - All bucket names the service may read or write
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub async fn new(
        buckets: &[String],
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        if buckets.is_empty() {
            return Err(StorageError::ConfigError(
                "No buckets configured for S3 storage".to_string(),
            ));
        }

        let mut stores = HashMap::new();
        for bucket in buckets {
            // Build AmazonS3 object store from environment and explicit settings.
            let mut builder = AmazonS3Builder::from_env()
                .with_region(region.clone())
                .with_bucket_name(bucket.clone());

            if let Some(ref endpoint) = endpoint_url {
                let allow_http = endpoint.starts_with("http://");
                builder = builder
                    .with_endpoint(endpoint.clone())
                    .with_allow_http(allow_http);
            }

            let store = builder
                .build()
                .map_err(|e| StorageError::ConfigError(e.to_string()))?;
            stores.insert(bucket.clone(), store);
        }

        Ok(S3Storage {
            stores,
            region,
            endpoint_url,
        })
    }

    fn store(&self, bucket: &str) -> StorageResult<&AmazonS3> {
        self.stores
            .get(bucket)
            .ok_or_else(|| StorageError::UnknownBucket(bucket.to_string()))
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn get(&self, bucket: &str, key: &str) -> StorageResult<Bytes> {
        let store = self.store(bucket)?;
        let location = Path::from(key);
        let start = std::time::Instant::now();

        let result: ObjectResult<_> = store.get(&location).await;
        let object = result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(key.to_string()),
            other => {
                tracing::error!(
                    error = %other,
                    bucket = %bucket,
                    key = %key,
                    "S3 get failed"
                );
                StorageError::DownloadFailed(other.to_string())
            }
        })?;

        let bytes = object
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = bytes.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 get successful"
        );

        Ok(bytes)
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        _content_type: &str,
    ) -> StorageResult<()> {
        let store = self.store(bucket)?;
        let location = Path::from(key);
        let size = data.len() as u64;
        let start = std::time::Instant::now();

        let result: ObjectResult<_> = store.put(&location, PutPayload::from(data)).await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 put failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 put successful"
        );

        Ok(())
    }

    async fn exists(&self, bucket: &str, key: &str) -> StorageResult<bool> {
        let store = self.store(bucket)?;
        let location = Path::from(key);

        match store.head(&location).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

impl std::fmt::Debug for S3Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Storage")
            .field("buckets", &self.stores.keys().collect::<Vec<_>>())
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_test_credentials() {
        std::env::set_var("AWS_ACCESS_KEY_ID", "test-access-key");
        std::env::set_var("AWS_SECRET_ACCESS_KEY", "test-secret-key");
    }

    #[tokio::test]
    async fn test_unknown_bucket_is_rejected() {
        set_test_credentials();
        let storage = S3Storage::new(
            &["configured-bucket".to_string()],
            "us-east-1".to_string(),
            Some("http://localhost:9000".to_string()),
        )
        .await
        .unwrap();

        let err = storage.get("other-bucket", "cat.png").await.unwrap_err();
        assert!(matches!(err, StorageError::UnknownBucket(_)));
    }

    #[tokio::test]
    async fn test_requires_at_least_one_bucket() {
        set_test_credentials();
        let err = S3Storage::new(&[], "us-east-1".to_string(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConfigError(_)));
    }
}
