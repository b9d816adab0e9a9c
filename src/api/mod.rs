// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod classify;
pub mod errors;
pub mod handlers;
pub mod http_server;

pub use classify::{classify_handler, ClassifyResponse, Prediction};
pub use errors::{ApiError, ErrorBody};
pub use handlers::{health_handler, HealthResponse};
pub use http_server::{create_app, start_server, AppState};
