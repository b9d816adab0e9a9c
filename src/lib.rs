// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod classifier;
pub mod config;
pub mod version;

// Re-export main types
pub use api::{
    create_app, start_server, ApiError, AppState, ClassifyResponse, ErrorBody, HealthResponse,
    Prediction,
};
pub use classifier::{
    decode_image_bytes, display_label, is_animal, prepare_input, ClassifierService,
    ImageClassifier, LabelTable, ScoredLabel, ANIMAL_KEYWORDS, INPUT_SIZE, TOP_K,
};
pub use config::NodeConfig;
