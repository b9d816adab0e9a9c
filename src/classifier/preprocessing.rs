// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image preprocessing for the ImageNet classifier

use image::DynamicImage;
use ndarray::Array4;

/// Input edge length expected by the classifier (ResNet-50 takes 224x224)
pub const INPUT_SIZE: u32 = 224;

/// Mean values for normalization (ImageNet)
pub const MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// Std values for normalization (ImageNet)
pub const STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Preprocess an image for classification
///
/// Steps:
/// 1. Resize to INPUT_SIZE x INPUT_SIZE (aspect ratio is not preserved)
/// 2. Convert to RGB (flattens alpha, expands grayscale)
/// 3. Normalize with ImageNet mean/std: (pixel/255 - mean) / std
/// 4. Convert to NCHW tensor format [1, 3, H, W]
pub fn prepare_input(image: &DynamicImage) -> Array4<f32> {
    let resized = image.resize_exact(
        INPUT_SIZE,
        INPUT_SIZE,
        image::imageops::FilterType::Lanczos3,
    );
    let rgb = resized.to_rgb8();

    // Create output tensor in NCHW format
    let mut tensor = Array4::zeros((1, 3, INPUT_SIZE as usize, INPUT_SIZE as usize));

    // Fill tensor with normalized pixel values
    for y in 0..INPUT_SIZE as usize {
        for x in 0..INPUT_SIZE as usize {
            let pixel = rgb.get_pixel(x as u32, y as u32);

            // Normalize: (pixel / 255.0 - mean) / std
            for c in 0..3 {
                let normalized = (pixel[c] as f32 / 255.0 - MEAN[c]) / STD[c];
                tensor[[0, c, y, x]] = normalized;
            }
        }
    }

    tensor
}
