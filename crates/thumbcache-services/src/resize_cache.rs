//! Resize-on-demand cache orchestrator.
//!
//! Protocol per request:
//! - no size specifier: serve the original from the source bucket;
//! - size specifier: allow-list gate, then look up the cached variant at the
//!   canonical key; on a miss, fetch the original, resample, persist the
//!   variant (awaited), and return the freshly computed bytes.
//!
//! Every cache-lookup failure counts as a miss, not just not-found. Requests
//! are handled independently with no cross-request state; concurrent misses
//! for the same variant key each regenerate and the last write wins, which is
//! safe because the resampler is deterministic.

use std::sync::Arc;

use bytes::Bytes;
use thumbcache_core::config::StageBuckets;
use thumbcache_core::{keys, AppError, Config, DimensionPolicy, ImageRequest, ImageResponse, SizeSpec};
use thumbcache_processing::Resampler;
use thumbcache_storage::{Storage, StorageError};

/// Content type tag written on persisted variants. The response content type
/// is still derived from the file extension.
const VARIANT_CONTENT_TYPE: &str = "image";

/// The cache orchestrator. Holds only immutable configuration and shared
/// collaborator handles; no per-request state survives a call.
#[derive(Clone)]
pub struct ResizeCacheService {
    storage: Arc<dyn Storage>,
    resampler: Arc<dyn Resampler>,
    policy: DimensionPolicy,
    config: Config,
}

impl ResizeCacheService {
    pub fn new(
        config: Config,
        storage: Arc<dyn Storage>,
        resampler: Arc<dyn Resampler>,
    ) -> Self {
        let policy = DimensionPolicy::new(config.allowed_dimensions.clone());
        ResizeCacheService {
            storage,
            resampler,
            policy,
            config,
        }
    }

    /// Serve an image request: original, cached variant, or a freshly
    /// generated one.
    pub async fn serve(&self, request: ImageRequest) -> Result<ImageResponse, AppError> {
        if request.file_name.trim().is_empty() {
            return Err(AppError::BadRequest("No file name provided".to_string()));
        }

        // The single URI decode; keys are derived from the decoded name only.
        let file_name = urlencoding::decode(&request.file_name)
            .map_err(|e| {
                AppError::BadRequest(format!("File name is not valid percent-encoding: {}", e))
            })?
            .into_owned();

        let stage = request.stage.as_deref().unwrap_or(&self.config.environment);
        let buckets = self.config.buckets_for_stage(stage).ok_or_else(|| {
            AppError::Forbidden(format!("No bucket configured for stage '{}'", stage))
        })?;

        let size_spec = match request.size.as_deref() {
            None => {
                tracing::debug!(file = %file_name, stage = %stage, "Serving original");
                let key = keys::original_key(&file_name);
                let body = self.fetch_original(&buckets.source, key).await?;
                return Ok(ImageResponse::attachment(key, body));
            }
            Some(spec) => spec,
        };

        // Policy gate runs before any store access.
        if !self.policy.is_allowed(size_spec) {
            tracing::debug!(size = %size_spec, "Size specifier not in allow-list");
            return Err(AppError::Forbidden(format!(
                "Size '{}' is not allowed",
                size_spec
            )));
        }

        // Strict parse before the resampler can ever see the dimensions.
        let size = SizeSpec::parse(size_spec).map_err(|e| AppError::BadRequest(e.to_string()))?;

        let variant_key = keys::variant_key(&size, &file_name);

        match self.storage.get(&buckets.resized, &variant_key).await {
            Ok(cached) => {
                tracing::debug!(key = %variant_key, stage = %stage, "Cache hit");
                return Ok(ImageResponse::attachment(&variant_key, cached));
            }
            Err(StorageError::NotFound(_)) => {
                tracing::debug!(key = %variant_key, stage = %stage, "Cache miss");
            }
            Err(e) => {
                // Any lookup failure counts as a miss; regeneration is the
                // recovery path.
                tracing::warn!(error = %e, key = %variant_key, "Cache lookup failed, regenerating");
            }
        }

        self.generate_and_persist(&file_name, &variant_key, size, buckets)
            .await
    }

    async fn fetch_original(&self, bucket: &str, key: &str) -> Result<Bytes, AppError> {
        self.storage.get(bucket, key).await.map_err(|e| match e {
            StorageError::NotFound(_) => {
                AppError::NotFound(format!("Original not found: {}", key))
            }
            other => {
                tracing::error!(error = %other, bucket = %bucket, key = %key, "Failed to fetch original");
                AppError::Upstream(other.to_string())
            }
        })
    }

    async fn generate_and_persist(
        &self,
        file_name: &str,
        variant_key: &str,
        size: SizeSpec,
        buckets: &StageBuckets,
    ) -> Result<ImageResponse, AppError> {
        let original = self
            .fetch_original(&buckets.source, keys::original_key(file_name))
            .await?;

        let resampler = Arc::clone(&self.resampler);
        let resized =
            tokio::task::spawn_blocking(move || resampler.resize(&original, size.width, size.height))
                .await
                .map_err(|e| AppError::Internal(format!("Resample task failed: {}", e)))?
                .map_err(|e| {
                    tracing::error!(error = %e, file = %file_name, size = %size, "Resample failed");
                    AppError::Upstream(e.to_string())
                })?;

        tracing::debug!(
            key = %variant_key,
            size_bytes = resized.len(),
            "Persisting generated variant"
        );

        self.storage
            .put(
                &buckets.resized,
                variant_key,
                resized.clone(),
                VARIANT_CONTENT_TYPE,
            )
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key = %variant_key, "Failed to persist variant");
                AppError::Upstream(e.to_string())
            })?;

        // The response carries the bytes just computed, not a re-read.
        Ok(ImageResponse::attachment(variant_key, resized))
    }
}
