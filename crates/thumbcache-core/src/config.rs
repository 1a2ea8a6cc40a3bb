//! Configuration module
//!
//! Process-wide immutable configuration, loaded once from the environment at
//! startup and never mutated afterwards. Bucket names are resolved per stage
//! (dev/stag/prod) so one deployment can front several environments.

use std::collections::HashMap;
use std::env;

use crate::storage_types::StorageBackend;

const DEFAULT_SERVER_PORT: u16 = 3000;

pub const DEV_STAGE: &str = "dev";
pub const STAG_STAGE: &str = "stag";
pub const PROD_STAGE: &str = "prod";

const STAGES: [&str; 3] = [DEV_STAGE, STAG_STAGE, PROD_STAGE];

/// Bucket pair for one deployment stage.
///
/// Single-bucket deployments configure only the resized bucket; the source
/// bucket then defaults to it, matching the cold-and-hot-in-one-bucket layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageBuckets {
    pub source: String,
    pub resized: String,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Default stage used when a request carries no stage selector.
    pub environment: String,
    buckets: HashMap<String, StageBuckets>,
    /// Exact size-specifier strings permitted for resizing. Empty = unrestricted.
    pub allowed_dimensions: Vec<String>,
    pub storage_backend: Option<StorageBackend>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `{DEV,STAG,PROD}_RESIZED_BUCKET` (and optional `*_SOURCE_BUCKET`
    /// overrides), `ALLOWED_DIMENSIONS` (comma-separated, e.g. "16x16,28x28"),
    /// `ENVIRONMENT`, `STORAGE_BACKEND`, `S3_REGION`/`AWS_REGION`,
    /// `S3_ENDPOINT`, `LOCAL_STORAGE_PATH` and `SERVER_PORT`.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = match env::var("SERVER_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid SERVER_PORT '{}': {}", port, e))?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| DEV_STAGE.to_string());

        let mut buckets = HashMap::new();
        for stage in STAGES {
            let upper = stage.to_uppercase();
            if let Ok(resized) = env::var(format!("{}_RESIZED_BUCKET", upper)) {
                let source =
                    env::var(format!("{}_SOURCE_BUCKET", upper)).unwrap_or_else(|_| resized.clone());
                buckets.insert(stage.to_string(), StageBuckets { source, resized });
            }
        }

        let allowed_dimensions = env::var("ALLOWED_DIMENSIONS")
            .map(|raw| parse_allowed_dimensions(&raw))
            .unwrap_or_default();

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(raw) => Some(
                raw.parse::<StorageBackend>()
                    .map_err(|e| anyhow::anyhow!(e))?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            server_port,
            environment,
            buckets,
            allowed_dimensions,
            storage_backend,
            s3_region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
        })
    }

    /// Resolve the bucket pair for a stage, if one is configured.
    pub fn buckets_for_stage(&self, stage: &str) -> Option<&StageBuckets> {
        self.buckets.get(stage)
    }

    /// All distinct bucket names across stages, for backends that bind a
    /// client per bucket.
    pub fn bucket_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .buckets
            .values()
            .flat_map(|b| [b.source.clone(), b.resized.clone()])
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Build a config directly, bypassing the environment. Intended for tests
    /// and embedding.
    pub fn with_buckets(
        environment: impl Into<String>,
        buckets: HashMap<String, StageBuckets>,
        allowed_dimensions: Vec<String>,
    ) -> Self {
        Config {
            server_port: DEFAULT_SERVER_PORT,
            environment: environment.into(),
            buckets,
            allowed_dimensions,
            storage_backend: None,
            s3_region: None,
            s3_endpoint: None,
            local_storage_path: None,
        }
    }
}

fn parse_allowed_dimensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_map() -> HashMap<String, StageBuckets> {
        let mut buckets = HashMap::new();
        buckets.insert(
            "dev".to_string(),
            StageBuckets {
                source: "dev-images".to_string(),
                resized: "dev-images-resized".to_string(),
            },
        );
        buckets.insert(
            "prod".to_string(),
            StageBuckets {
                source: "prod-images".to_string(),
                resized: "prod-images".to_string(),
            },
        );
        buckets
    }

    #[test]
    fn test_stage_resolution() {
        let config = Config::with_buckets("dev", stage_map(), vec![]);
        let dev = config.buckets_for_stage("dev").unwrap();
        assert_eq!(dev.source, "dev-images");
        assert_eq!(dev.resized, "dev-images-resized");
        assert!(config.buckets_for_stage("stag").is_none());
    }

    #[test]
    fn test_bucket_names_deduplicated() {
        let config = Config::with_buckets("dev", stage_map(), vec![]);
        let names = config.bucket_names();
        assert_eq!(
            names,
            vec![
                "dev-images".to_string(),
                "dev-images-resized".to_string(),
                "prod-images".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_allowed_dimensions() {
        assert_eq!(
            parse_allowed_dimensions("16x16,28x28"),
            vec!["16x16".to_string(), "28x28".to_string()]
        );
        assert_eq!(
            parse_allowed_dimensions(" 16x16 , ,28x28,"),
            vec!["16x16".to_string(), "28x28".to_string()]
        );
        assert!(parse_allowed_dimensions("").is_empty());
    }
}
