//! Normalized image request, as delivered by a transport adapter.

use serde::Deserialize;

/// A normalized request for an image, independent of the transport that
/// carried it.
///
/// `file_name` is the raw, still-URI-encoded path segment; the orchestrator
/// performs the single decode so cache keys are derived from exactly one
/// decoding pass regardless of transport.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRequest {
    pub file_name: String,
    /// Optional `<width>x<height>` size specifier.
    pub size: Option<String>,
    /// Optional deployment-stage selector; falls back to the configured
    /// default environment when absent.
    pub stage: Option<String>,
}

impl ImageRequest {
    pub fn new(file_name: impl Into<String>) -> Self {
        ImageRequest {
            file_name: file_name.into(),
            size: None,
            stage: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }
}
