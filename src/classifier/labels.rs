// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ImageNet class vocabulary and top-K decoding
//!
//! The label table is loaded from the class-index JSON that ships with the
//! pretrained model: `{"0": ["n01440764", "tench"], "1": [...], ...}`.
//! Indices must be contiguous from 0 and the table length must match the
//! model's output width.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use super::ScoredLabel;

/// The 1000-class vocabulary of a pretrained ImageNet classifier
#[derive(Debug, Clone)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    /// Load the label table from a class-index JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read label file {}", path.display()))?;
        Self::from_class_index_json(&data)
    }

    /// Parse a class-index JSON document into a label table
    ///
    /// # Errors
    /// Fails when the document is not a map of `index -> [wnid, label]`,
    /// when an index is non-numeric or out of range, when an index is
    /// missing, or when a label is empty.
    pub fn from_class_index_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, (String, String)> =
            serde_json::from_str(json).context("Label file is not a valid class-index JSON")?;

        if raw.is_empty() {
            anyhow::bail!("Label file contains no classes");
        }

        let mut labels = vec![String::new(); raw.len()];
        let mut seen = vec![false; raw.len()];

        for (index, (_wnid, label)) in &raw {
            let idx: usize = index
                .parse()
                .with_context(|| format!("Non-numeric class index '{}'", index))?;
            if idx >= labels.len() {
                anyhow::bail!(
                    "Class index {} out of range for {} classes (indices must be contiguous from 0)",
                    idx,
                    labels.len()
                );
            }
            if label.is_empty() {
                anyhow::bail!("Class index {} has an empty label", idx);
            }
            labels[idx] = label.clone();
            seen[idx] = true;
        }

        if let Some(missing) = seen.iter().position(|s| !s) {
            anyhow::bail!(
                "Class index {} is missing (indices must be contiguous from 0)",
                missing
            );
        }

        Ok(Self { labels })
    }

    /// Raw label for a class index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|s| s.as_str())
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Decode a probability vector into the top-k (label, score) pairs
    ///
    /// The result is sorted by descending score and truncated to k entries
    /// (fewer when the table has fewer classes than k).
    ///
    /// # Errors
    /// Fails when the probability vector length does not match the table.
    pub fn decode_top_k(&self, probs: &[f32], k: usize) -> Result<Vec<ScoredLabel>> {
        if probs.len() != self.labels.len() {
            anyhow::bail!(
                "Probability vector has {} entries but the label table has {} classes",
                probs.len(),
                self.labels.len()
            );
        }

        let mut ranked: Vec<ScoredLabel> = probs
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoredLabel {
                label: self.labels[i].clone(),
                score,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(k);

        Ok(ranked)
    }
}

/// Format a raw class label for display
///
/// Underscores become spaces; every letter that does not follow another
/// letter is uppercased and the rest are lowercased, so
/// "three-toed_sloth" becomes "Three-Toed Sloth".
pub fn display_label(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;
    for ch in raw.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
