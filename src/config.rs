// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration from environment variables

use std::env;
use std::path::PathBuf;

/// Default API port
pub const DEFAULT_API_PORT: u16 = 5000;

/// Default ONNX model location
pub const DEFAULT_MODEL_PATH: &str = "./models/resnet50.onnx";

/// Default class-index JSON location
pub const DEFAULT_LABELS_PATH: &str = "./models/imagenet_class_index.json";

/// Runtime configuration for the classifier node
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Port for the HTTP API (API_PORT)
    pub api_port: u16,
    /// Path to the ONNX classifier model (MODEL_PATH)
    pub model_path: PathBuf,
    /// Path to the class-index JSON label table (LABELS_PATH)
    pub labels_path: PathBuf,
}

impl NodeConfig {
    /// Read configuration from environment variables, falling back to
    /// the defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_API_PORT);

        let model_path =
            env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());

        let labels_path =
            env::var("LABELS_PATH").unwrap_or_else(|_| DEFAULT_LABELS_PATH.to_string());

        Self {
            api_port,
            model_path: PathBuf::from(model_path),
            labels_path: PathBuf::from(labels_path),
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_port: DEFAULT_API_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            labels_path: PathBuf::from(DEFAULT_LABELS_PATH),
        }
    }
}
