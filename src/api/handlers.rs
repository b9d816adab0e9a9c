// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Health endpoint handler

use axum::Json;
use serde::{Deserialize, Serialize};

/// Response body for GET /health
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Liveness check
///
/// Always returns 200 with `{"status": "ok"}`. Does not touch the
/// classifier, so it stays green even while inference requests fail.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
