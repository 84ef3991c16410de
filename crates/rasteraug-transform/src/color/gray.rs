// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayscale conversion using BT.601 luma weights.

use rasteraug_core::{AugmentError, PixelBuffer, Result, Shape};
use tracing::{debug, instrument};

use crate::sample::round_saturate;

const WEIGHT_R: f64 = 0.299;
const WEIGHT_G: f64 = 0.587;
const WEIGHT_B: f64 = 0.114;

/// Reduce an image to a single luma channel.
///
/// Single-channel input is returned as an exact copy. For RGB input every
/// pixel becomes `round(0.299 R + 0.587 G + 0.114 B)`, saturated to
/// `[0, 255]`.
#[instrument(skip(img), fields(shape = %img.shape()))]
pub fn to_gray(img: &PixelBuffer) -> Result<PixelBuffer> {
    match img.channels() {
        1 => {
            debug!("Input already single-channel; copying");
            Ok(img.clone())
        }
        3 => {
            let shape = Shape::new(img.height(), img.width(), 1);
            PixelBuffer::from_fn(shape, |row, col, _| luma(img.pixel(row, col)))
        }
        other => Err(AugmentError::shape(format!(
            "to_gray expects 1 or 3 channels (got {other})"
        ))),
    }
}

fn luma(rgb: &[u8]) -> u8 {
    let y = WEIGHT_R * f64::from(rgb[0])
        + WEIGHT_G * f64::from(rgb[1])
        + WEIGHT_B * f64::from(rgb[2]);
    round_saturate(y)
}
