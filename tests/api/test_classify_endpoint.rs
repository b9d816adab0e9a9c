// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Classify endpoint success-path tests
//!
//! These tests verify that:
//! - A valid upload returns 200 with exactly five predictions
//! - Names are display-formatted (spaces, title case)
//! - Confidences are percentages in descending order
//! - top_result mirrors the first prediction
//! - Responses are deterministic for identical uploads
//! - Extra form fields and different image formats are handled

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::util::ServiceExt; // for `oneshot`

use super::support::{
    app_with_ranking, body_json, classify_request, dog_ranking, tiny_jpeg_bytes, tiny_png_bytes,
    MultipartBuilder,
};

/// Test 1: valid upload returns 200 with exactly five predictions
#[tokio::test]
async fn test_classify_returns_top5() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new()
        .file_field("file", "dog.png", "image/png", &tiny_png_bytes())
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let predictions = json["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 5);
}

/// Test 2: names carry no underscores and are title-cased
#[tokio::test]
async fn test_classify_formats_names() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new()
        .file_field("file", "dog.png", "image/png", &tiny_png_bytes())
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    let json = body_json(response).await;
    let predictions = json["predictions"].as_array().unwrap();

    assert_eq!(predictions[0]["name"], "Golden Retriever");
    assert_eq!(predictions[1]["name"], "Labrador Retriever");
    assert_eq!(predictions[4]["name"], "Tennis Ball");

    for prediction in predictions {
        let name = prediction["name"].as_str().unwrap();
        assert!(
            !name.contains('_'),
            "name '{}' contains an underscore",
            name
        );
    }
}

/// Test 3: confidences are percentages in [0, 100], descending
#[tokio::test]
async fn test_classify_confidence_scaling_and_order() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new()
        .file_field("file", "dog.png", "image/png", &tiny_png_bytes())
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    let json = body_json(response).await;

    let confidences: Vec<f64> = json["predictions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["confidence"].as_f64().unwrap())
        .collect();

    // Stub ranking is 0.62 down to 0.02, scaled by 100
    assert!((confidences[0] - 62.0).abs() < 1e-3);
    assert!((confidences[4] - 2.0).abs() < 1e-3);

    for pair in confidences.windows(2) {
        assert!(pair[0] >= pair[1], "confidences must descend: {:?}", pair);
    }
    for confidence in confidences {
        assert!((0.0..=100.0).contains(&confidence));
    }
}

/// Test 4: top_result mirrors the first prediction
#[tokio::test]
async fn test_classify_top_result_is_first() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new()
        .file_field("file", "dog.png", "image/png", &tiny_png_bytes())
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    let json = body_json(response).await;

    assert_eq!(json["top_result"], json["predictions"][0]);
}

/// Test 5: identical uploads produce identical responses
#[tokio::test]
async fn test_classify_is_deterministic() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new()
        .file_field("file", "dog.png", "image/png", &tiny_png_bytes())
        .build();

    let first = app
        .clone()
        .oneshot(classify_request(body.clone()))
        .await
        .unwrap();
    let second = app.oneshot(classify_request(body)).await.unwrap();

    assert_eq!(body_json(first).await, body_json(second).await);
}

/// Test 6: extra form fields around the upload are ignored
#[tokio::test]
async fn test_classify_ignores_other_fields() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new()
        .text_field("comment", "my pet")
        .file_field("file", "dog.png", "image/png", &tiny_png_bytes())
        .text_field("source", "camera")
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

/// Test 7: JPEG uploads decode as well as PNG
#[tokio::test]
async fn test_classify_accepts_jpeg() {
    let app = app_with_ranking(dog_ranking());

    let body = MultipartBuilder::new()
        .file_field("file", "dog.jpg", "image/jpeg", &tiny_jpeg_bytes())
        .build();

    let response = app.oneshot(classify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

/// Test 8: preflight OPTIONS succeeds under the permissive CORS layer
#[tokio::test]
async fn test_classify_preflight_cors() {
    let app = app_with_ranking(dog_ranking());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/classify")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
