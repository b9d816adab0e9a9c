// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Classify endpoint response types

use serde::{Deserialize, Serialize};

use crate::classifier::{display_label, ScoredLabel};

/// A single prediction entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    /// Display label, e.g. "Golden Retriever"
    pub name: String,
    /// Confidence percentage in [0, 100]
    pub confidence: f32,
}

/// Response body for POST /classify
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifyResponse {
    /// Top-5 predictions in descending confidence order
    pub predictions: Vec<Prediction>,
    /// Copy of the first prediction
    pub top_result: Prediction,
}

impl Prediction {
    fn from_scored(scored: &ScoredLabel) -> Self {
        Self {
            name: display_label(&scored.label),
            confidence: scored.score * 100.0,
        }
    }
}

impl ClassifyResponse {
    /// Build the response body from a ranked prediction list
    ///
    /// The decoder's ordering is preserved as-is. Returns None when the
    /// list is empty.
    pub fn from_ranked(ranked: &[ScoredLabel]) -> Option<Self> {
        let predictions: Vec<Prediction> = ranked.iter().map(Prediction::from_scored).collect();
        let top_result = predictions.first()?.clone();
        Some(Self {
            predictions,
            top_result,
        })
    }
}
