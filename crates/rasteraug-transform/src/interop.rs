// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversion between `PixelBuffer` and the `image` crate's in-memory types.
// Only 8-bit grayscale and RGB images map onto a pixel buffer; no encoding or
// decoding happens here.

use image::{DynamicImage, GrayImage, RgbImage};
use rasteraug_core::{AugmentError, PixelBuffer, Result};

/// Copy an 8-bit `Luma` or `Rgb` image into a pixel buffer.
pub fn from_dynamic(image: &DynamicImage) -> Result<PixelBuffer> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    match image {
        DynamicImage::ImageLuma8(gray) => PixelBuffer::new(height, width, 1, gray.as_raw().clone()),
        DynamicImage::ImageRgb8(rgb) => PixelBuffer::new(height, width, 3, rgb.as_raw().clone()),
        other => Err(AugmentError::shape(format!(
            "expected an 8-bit Luma or Rgb image (got {:?})",
            other.color()
        ))),
    }
}

/// Copy a pixel buffer into a `DynamicImage` (`ImageLuma8` or `ImageRgb8`).
pub fn to_dynamic(buffer: &PixelBuffer) -> Result<DynamicImage> {
    let width = u32::try_from(buffer.width())
        .map_err(|_| AugmentError::shape(format!("width {} exceeds u32", buffer.width())))?;
    let height = u32::try_from(buffer.height())
        .map_err(|_| AugmentError::shape(format!("height {} exceeds u32", buffer.height())))?;
    let data = buffer.as_slice().to_vec();

    let image = match buffer.channels() {
        1 => GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        _ => None,
    };
    image.ok_or_else(|| {
        AugmentError::shape(format!("cannot represent {} as an 8-bit image", buffer.shape()))
    })
}
