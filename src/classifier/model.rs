// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX Image Classifier Wrapper
//!
//! This module provides a wrapper around ONNX Runtime for running a
//! pretrained 1000-class ImageNet classifier (ResNet-50 export).
//!
//! Features:
//! - ONNX model loading from disk (CPU execution provider)
//! - Class vocabulary loaded from the model's class-index JSON
//! - Softmax over the raw class scores
//! - Top-5 decode into (label, score) pairs

use anyhow::{Context, Result};
use ndarray::{Array4, Axis};
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

use super::labels::LabelTable;
use super::preprocessing::INPUT_SIZE;
use super::{ClassifierService, ScoredLabel};

/// Number of predictions returned per image
pub const TOP_K: usize = 5;

/// ONNX-based ImageNet classifier
///
/// Wraps an ONNX Runtime session plus the class vocabulary. Constructed
/// once at startup and shared read-only for the process lifetime.
///
/// # Thread Safety
/// The session is wrapped in Arc<Mutex> for thread-safe shared access;
/// everything else is immutable after construction.
#[derive(Clone)]
pub struct ImageClassifier {
    /// ONNX Runtime session (wrapped in Arc<Mutex> for thread-safe shared access)
    session: Arc<Mutex<Session>>,

    /// Class vocabulary matching the model's output width
    labels: Arc<LabelTable>,

    /// Name of the model's input tensor
    input_name: String,

    /// Model name (e.g. "resnet50")
    model_name: String,
}

impl std::fmt::Debug for ImageClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageClassifier")
            .field("model_name", &self.model_name)
            .field("input_name", &self.input_name)
            .field("classes", &self.labels.len())
            .finish_non_exhaustive()
    }
}

impl ImageClassifier {
    /// Creates a new classifier from disk paths
    ///
    /// # Arguments
    /// - `model_path`: Path to the ONNX model file
    /// - `labels_path`: Path to the class-index JSON file
    ///
    /// # Errors
    /// Returns error if:
    /// - Model or label file not found or invalid
    /// - ONNX Runtime initialization fails
    /// - The model's output width does not match the label table
    pub async fn new<P: AsRef<Path>>(model_path: P, labels_path: P) -> Result<Self> {
        let model_path = model_path.as_ref();
        let labels_path = labels_path.as_ref();

        // Validate paths exist
        if !model_path.exists() {
            anyhow::bail!("ONNX model file not found: {}", model_path.display());
        }
        if !labels_path.exists() {
            anyhow::bail!("Label file not found: {}", labels_path.display());
        }

        let labels = LabelTable::from_file(labels_path).with_context(|| {
            format!("Failed to load label table from {}", labels_path.display())
        })?;
        info!("✅ Label table loaded: {} classes", labels.len());

        info!("🚀 Initializing ONNX classifier session (CPU)");
        let mut session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .context(format!(
                "Failed to load ONNX model from {}",
                model_path.display()
            ))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| anyhow::anyhow!("Model declares no inputs"))?;

        // Validate the output width against the label table by running a
        // test inference on a zero tensor
        // Wrap in a block to ensure outputs are dropped before moving session
        {
            let test_input =
                Array4::<f32>::zeros((1, 3, INPUT_SIZE as usize, INPUT_SIZE as usize));
            let outputs = session.run(ort::inputs![
                input_name.as_str() => Value::from_array(test_input)?
            ])?;

            // Extract by index; output names vary across exports
            let output_tensor = outputs[0]
                .try_extract_array::<f32>()
                .context("Failed to extract output tensor")?;
            let output_shape = output_tensor.shape();

            if output_shape != [1, labels.len()] {
                anyhow::bail!(
                    "Model outputs unexpected dimensions: {:?} (expected [1, {}])",
                    output_shape,
                    labels.len()
                );
            }
        } // outputs dropped here

        info!("✅ ONNX classifier model loaded successfully");

        let model_name = model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-classifier")
            .to_string();

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            labels: Arc::new(labels),
            input_name,
            model_name,
        })
    }

    /// Rank the classes for a normalized input tensor
    ///
    /// # Arguments
    /// - `input`: NCHW tensor of shape [1, 3, 224, 224]
    ///
    /// # Returns
    /// - `Result<Vec<ScoredLabel>>`: Top-5 (label, score) pairs in
    ///   descending score order, scores in [0, 1]
    pub fn predict(&self, input: &Array4<f32>) -> Result<Vec<ScoredLabel>> {
        let expected = [1, 3, INPUT_SIZE as usize, INPUT_SIZE as usize];
        if input.shape() != expected {
            anyhow::bail!(
                "Input tensor has shape {:?} (expected {:?})",
                input.shape(),
                expected
            );
        }

        // Run inference - lock session for thread-safe access
        let mut session_guard = self.session.lock().unwrap();
        let outputs = session_guard.run(ort::inputs![
            self.input_name.as_str() => Value::from_array(input.clone())?
        ])?;

        // Extract by index; output names vary across exports
        let output_array = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract output tensor")?;

        if output_array.ndim() != 2 || output_array.shape()[0] != 1 {
            anyhow::bail!(
                "Model outputs unexpected dimensions: {:?} (expected [1, {}])",
                output_array.shape(),
                self.labels.len()
            );
        }

        // The export emits unnormalized class scores; softmax them into
        // probabilities before ranking
        let scores: Vec<f32> = output_array.index_axis(Axis(0), 0).iter().copied().collect();
        let probs = softmax(&scores);

        self.labels.decode_top_k(&probs, TOP_K)
    }

    /// Returns the model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Returns the number of classes in the vocabulary
    pub fn class_count(&self) -> usize {
        self.labels.len()
    }
}

impl ClassifierService for ImageClassifier {
    fn predict(&self, input: &Array4<f32>) -> Result<Vec<ScoredLabel>> {
        ImageClassifier::predict(self, input)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Numerically stable softmax over a score vector
pub fn softmax(scores: &[f32]) -> Vec<f32> {
    if scores.is_empty() {
        return Vec::new();
    }
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}
