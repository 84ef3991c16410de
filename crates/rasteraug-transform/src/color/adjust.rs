// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pointwise brightness and contrast adjustment. Both transforms depend only on
// the sample value, so each builds a 256-entry lookup table once and maps the
// buffer through it.

use rasteraug_core::{AugmentError, PixelBuffer, Result};
use tracing::instrument;

use crate::sample::{round_saturate, saturate};

/// Contrast pivot: deviations from mid-gray are scaled.
const MID_GRAY: f32 = 128.0;

/// Shift every sample by `delta`, saturating at 0 and 255.
///
/// Any `delta` is accepted; values beyond +-255 simply saturate.
#[instrument(skip(img), fields(shape = %img.shape()))]
pub fn brightness(img: &PixelBuffer, delta: i32) -> PixelBuffer {
    let table = build_table(|v| saturate(i64::from(v) + i64::from(delta)));
    img.map_samples(|v| table[usize::from(v)])
}

/// Scale every sample's deviation from 128 by `alpha`.
///
/// Computes `round((v - 128) * alpha + 128)` in single precision, rounding
/// half away from zero, then saturates. `alpha = 0` flattens to 128,
/// `alpha = 1` is the identity.
#[instrument(skip(img), fields(shape = %img.shape()))]
pub fn contrast(img: &PixelBuffer, alpha: f32) -> Result<PixelBuffer> {
    if !alpha.is_finite() {
        return Err(AugmentError::argument(format!(
            "contrast alpha must be finite (got {alpha})"
        )));
    }
    let table = build_table(|v| {
        let scaled = (f32::from(v) - MID_GRAY) * alpha + MID_GRAY;
        round_saturate(f64::from(scaled))
    });
    Ok(img.map_samples(|v| table[usize::from(v)]))
}

fn build_table(f: impl Fn(u8) -> u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (value, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
        *slot = f(value);
    }
    table
}
