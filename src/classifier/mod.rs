// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image classification pipeline
//!
//! Everything between raw upload bytes and a ranked prediction list:
//! decode ([`image_input`]), tensor normalization ([`preprocessing`]),
//! the ONNX session wrapper ([`model`]), the class vocabulary
//! ([`labels`]) and the animal keyword heuristic ([`keywords`]).

pub mod image_input;
pub mod keywords;
pub mod labels;
pub mod model;
pub mod preprocessing;

use anyhow::Result;
use ndarray::Array4;

/// A single (label, score) pair produced by top-K decoding
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLabel {
    /// Raw class label (e.g. "golden_retriever")
    pub label: String,
    /// Probability in [0, 1]
    pub score: f32,
}

/// Inference seam between the HTTP layer and the loaded model
///
/// Handlers depend on this trait rather than the concrete session so
/// endpoint tests can substitute a stub implementation.
pub trait ClassifierService: Send + Sync {
    /// Rank the classes for a normalized [1, 3, 224, 224] input tensor,
    /// returning the top entries in descending score order
    fn predict(&self, input: &Array4<f32>) -> Result<Vec<ScoredLabel>>;

    /// Human-readable model identifier
    fn model_name(&self) -> &str;
}

pub use image_input::{
    decode_image_bytes, detect_format, ImageInfo, ImageInputError, MAX_IMAGE_SIZE,
};
pub use keywords::{is_animal, ANIMAL_KEYWORDS};
pub use labels::{display_label, LabelTable};
pub use model::{ImageClassifier, TOP_K};
pub use preprocessing::{prepare_input, INPUT_SIZE, MEAN, STD};
