// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Image upload route.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Multipart field that carries the image.
const IMAGE_FIELD: &str = "image";

/// Upload routes. The body limit replaces axum's 2 MB default for this route
/// only.
pub fn routes(max_upload_bytes: usize) -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/upload",
        post(upload_image).layer(DefaultBodyLimit::max(max_upload_bytes)),
    )
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Store the `image` file part and return its public URL.
///
/// Other parts, and an `image` part sent as a plain text field, are skipped.
/// A file sent under any other field name is therefore ignored rather than
/// rejected as unexpected, and a request with no `image` file gets 400.
async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let bytes = field.bytes().await?;
        let stored = state
            .uploads
            .store(Some(&original_name), &bytes)
            .await
            .map_err(|e| AppError::Internal(e.into()))?;

        tracing::info!(
            filename = %stored.filename,
            bytes = stored.size,
            "Image uploaded"
        );

        return Ok(Json(UploadResponse { url: stored.url }));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}
