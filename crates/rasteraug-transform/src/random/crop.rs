// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Seeded random crop.

use rasteraug_core::{AugmentError, PixelBuffer, Result};
use tracing::{debug, instrument};

use super::rng::DeterministicRng;

/// Extract an `out_h x out_w` window at a seeded random position.
///
/// The top offset is drawn first from `[0, H - out_h]`, then the left offset
/// from `[0, W - out_w]`. A full-size request returns a copy of the input for
/// every seed.
#[instrument(skip(img), fields(shape = %img.shape()))]
pub fn random_crop(
    img: &PixelBuffer,
    out_h: usize,
    out_w: usize,
    seed: u64,
) -> Result<PixelBuffer> {
    if out_h == 0 || out_w == 0 {
        return Err(AugmentError::argument(format!(
            "out_h and out_w must be > 0 (got {out_h}x{out_w})"
        )));
    }
    if out_h > img.height() || out_w > img.width() {
        return Err(AugmentError::argument(format!(
            "crop size {out_h}x{out_w} must be <= input size {}x{}",
            img.height(),
            img.width()
        )));
    }
    if out_h == img.height() && out_w == img.width() {
        debug!("Crop covers the whole image; copying input");
        return Ok(img.clone());
    }

    let mut rng = DeterministicRng::new(seed);
    let top = draw_offset(&mut rng, img.height() - out_h);
    let left = draw_offset(&mut rng, img.width() - out_w);
    debug!(top, left, "Crop offsets drawn");

    copy_region(img, top, left, out_h, out_w)
}

fn draw_offset(rng: &mut DeterministicRng, max: usize) -> usize {
    // `max` is bounded by a buffer extent, which always fits in i64.
    rng.uniform_int(0, max as i64) as usize
}

/// Copy the `height x width` window whose top-left corner is (`top`, `left`).
fn copy_region(
    img: &PixelBuffer,
    top: usize,
    left: usize,
    height: usize,
    width: usize,
) -> Result<PixelBuffer> {
    let channels = img.channels();
    let span = left * channels..(left + width) * channels;
    let mut data = Vec::with_capacity(height * width * channels);
    for row in top..top + height {
        data.extend_from_slice(&img.row(row)[span.clone()]);
    }
    PixelBuffer::new(height, width, channels, data)
}
