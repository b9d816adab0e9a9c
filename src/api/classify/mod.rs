// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Classify endpoint (POST /classify)

pub mod handler;
pub mod response;

pub use handler::classify_handler;
pub use response::{ClassifyResponse, Prediction};
