//! Image serving handler - the HTTP request adapter.

use crate::error::HttpError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{OriginalUri, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use thumbcache_core::{AppError, ImageRequest};

#[derive(Debug, Deserialize)]
pub struct ServeParams {
    /// Requested `<width>x<height>` size specifier.
    pub size: Option<String>,
    /// Deployment-stage selector (dev/stag/prod); defaults to the configured
    /// environment.
    pub stage: Option<String>,
}

/// GET /images/{file}?size=WxH&stage=env
///
/// The file segment is taken from the raw request URI rather than the path
/// extractor: axum's `Path` percent-decodes, and the orchestrator owns the
/// single decode that cache keys are derived from.
pub async fn serve_image(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ServeParams>,
) -> Result<impl IntoResponse, HttpError> {
    let file_name = uri
        .path()
        .strip_prefix("/images/")
        .unwrap_or_default()
        .to_string();

    tracing::debug!(file = %file_name, size = ?params.size, stage = ?params.stage, "Serving image request");

    let request = ImageRequest {
        file_name,
        size: params.size,
        stage: params.stage,
    };

    let image = state.service.serve(request).await.map_err(HttpError)?;

    let response = Response::builder()
        .status(StatusCode::from_u16(image.status).unwrap_or(StatusCode::OK))
        .header(header::CONTENT_TYPE, image.content_type)
        .header(header::CONTENT_DISPOSITION, image.content_disposition)
        .header(header::CONTENT_LENGTH, image.body.len())
        .body(Body::from(image.body))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            HttpError(AppError::Internal(e.to_string()))
        })?;

    Ok(response)
}
