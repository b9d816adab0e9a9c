// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Classify endpoint error-path tests
//!
//! The endpoint distinguishes three failure classes:
//! - 400 "No file uploaded" when no file part is present at all
//! - 400 "No file selected" when the file part carries an empty filename
//! - 500 with a descriptive message when decoding or inference fails

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt; // for `oneshot`

use super::support::{
    app_with_failure, app_with_ranking, body_json, classify_request, dog_ranking, tiny_png_bytes,
    MultipartBuilder, BOUNDARY,
};

/// Test 1: multipart body without a file part returns 400
#[tokio::test]
async fn test_missing_file_returns_400() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new()
        .text_field("comment", "no image here")
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "No file uploaded"}));
}

/// Test 2: file part with an empty filename returns 400
#[tokio::test]
async fn test_empty_filename_returns_400() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new()
        .file_field("file", "", "application/octet-stream", b"")
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "No file selected"}));
}

/// Test 3: a plain form value named "file" is not an upload
#[tokio::test]
async fn test_form_value_named_file_returns_400() {
    let app = app_with_ranking(dog_ranking());

    // No filename attribute at all, so this is a text field
    let body = MultipartBuilder::new()
        .text_field("file", "not-a-binary-upload")
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "No file uploaded"}));
}

/// Test 4: bytes that are not an image return 500 with an error message
#[tokio::test]
async fn test_non_image_bytes_return_500() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new()
        .file_field("file", "notes.txt", "text/plain", b"just some text")
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert!(!json["error"].as_str().unwrap().is_empty());
}

/// Test 5: truncated image data reports a decode failure
#[tokio::test]
async fn test_corrupted_image_returns_500() {
    let app = app_with_ranking(dog_ranking());

    // Valid PNG signature followed by garbage
    let corrupted = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    let body = MultipartBuilder::new()
        .file_field("file", "broken.png", "image/png", &corrupted)
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(
        message.contains("Failed to decode image"),
        "unexpected error message: {}",
        message
    );
}

/// Test 6: inference failures surface as 500 with the underlying message
#[tokio::test]
async fn test_inference_failure_returns_500() {
    let app = app_with_failure("session exploded");

    let body = MultipartBuilder::new()
        .file_field("file", "dog.png", "image/png", &tiny_png_bytes())
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({"error": "session exploded"}));
}

/// Test 7: a non-multipart body returns 400
#[tokio::test]
async fn test_non_multipart_returns_400() {
    let app = app_with_ranking(dog_ranking());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/classify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"file": "dog.png"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "No file uploaded"}));
}

/// Test 8: an empty multipart body returns 400
#[tokio::test]
async fn test_empty_multipart_returns_400() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new().build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "No file uploaded"}));
}

/// Test 9: GET on the classify route is rejected
#[tokio::test]
async fn test_classify_get_method_not_allowed() {
    let app = app_with_ranking(dog_ranking());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/classify")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Test 10: uploads over the 10MB image cap are rejected with 500
#[tokio::test]
async fn test_oversized_image_returns_500() {
    let app = app_with_ranking(dog_ranking());

    // Above the image cap but below the HTTP body limit
    let oversized = vec![0u8; 10 * 1024 * 1024 + 512 * 1024];
    let body = MultipartBuilder::new()
        .file_field("file", "huge.png", "image/png", &oversized)
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(
        message.contains("too large"),
        "unexpected error message: {}",
        message
    );
}

/// Test 11: boundary declared but body uses a different one
#[tokio::test]
async fn test_mismatched_boundary_returns_400() {
    let app = app_with_ranking(dog_ranking());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/classify")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from("--some-other-boundary--\r\n"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "No file uploaded"}));
}
