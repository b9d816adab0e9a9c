// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Classify endpoint handler

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use axum_extra::extract::multipart::{Multipart, MultipartRejection};
use tracing::{debug, info};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::classifier::{decode_image_bytes, prepare_input};

use super::response::ClassifyResponse;

/// POST /classify - Upload an image, get the top-5 ImageNet predictions
///
/// Expects a multipart form with the image bytes in a field named `file`.
/// A field without a filename attribute is a plain form value and does
/// not count as an upload; an upload with an empty filename is rejected
/// separately. All decode and inference failures surface as 500 with the
/// underlying error text.
pub async fn classify_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    // A request that is not multipart at all counts as "no file uploaded"
    let mut multipart = multipart.map_err(|_| ApiError::MissingFile)?;

    let mut upload: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::MissingFile)?
    {
        if field.name() != Some("file") {
            continue;
        }

        let Some(file_name) = field.file_name().map(str::to_owned) else {
            // A `file` part with no filename is a plain form value
            continue;
        };

        if file_name.is_empty() {
            return Err(ApiError::EmptySelection);
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::Processing(e.to_string()))?;
        upload = Some(data);
        break;
    }

    let data = upload.ok_or(ApiError::MissingFile)?;

    let (image, image_info) =
        decode_image_bytes(&data).map_err(|e| ApiError::Processing(e.to_string()))?;
    debug!(
        "Decoded upload: {}x{} {:?} ({} bytes)",
        image_info.width, image_info.height, image_info.format, image_info.size_bytes
    );

    let tensor = prepare_input(&image);

    let ranked = state
        .classifier
        .predict(&tensor)
        .map_err(|e| ApiError::Processing(e.to_string()))?;

    let response = ClassifyResponse::from_ranked(&ranked)
        .ok_or_else(|| ApiError::Processing("Classifier returned no predictions".to_string()))?;

    info!(
        "Classified upload as '{}' ({:.1}%)",
        response.top_result.name, response.top_result.confidence
    );

    Ok(Json(response))
}
