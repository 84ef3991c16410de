// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Augmenter — chainable wrapper over the transform functions.

use image::DynamicImage;
use rasteraug_core::{DEFAULT_SEED, PixelBuffer, ResizeConfig, Result, Shape};
use tracing::debug;

use crate::{color, geometry, interop, random};

/// Augmentation chain over a single in-memory image.
///
/// Every step consumes `self` and returns a new `Augmenter` wrapping a freshly
/// allocated buffer, enabling method chaining:
///
/// ```ignore
/// let out = Augmenter::new(img)
///     .random_crop(224, 224, seed)?
///     .brightness(12)
///     .contrast(1.2)?
///     .noise(4, seed)?
///     .into_buffer();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmenter {
    buffer: PixelBuffer,
}

impl Augmenter {
    // -- Construction ---------------------------------------------------------

    pub fn new(buffer: PixelBuffer) -> Self {
        Self { buffer }
    }

    /// Wrap an 8-bit grayscale or RGB `DynamicImage`.
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        let buffer = interop::from_dynamic(image)?;
        debug!(shape = %buffer.shape(), "Image wrapped");
        Ok(Self { buffer })
    }

    // -- Accessors ------------------------------------------------------------

    pub fn shape(&self) -> Shape {
        self.buffer.shape()
    }

    pub fn as_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    /// Convert the current buffer back into a `DynamicImage`.
    pub fn to_dynamic(&self) -> Result<DynamicImage> {
        interop::to_dynamic(&self.buffer)
    }

    // -- Transformations (consume self, return new Self) -----------------------

    pub fn gray(self) -> Result<Self> {
        Ok(Self::new(color::to_gray(&self.buffer)?))
    }

    pub fn brightness(self, delta: i32) -> Self {
        Self::new(color::brightness(&self.buffer, delta))
    }

    pub fn contrast(self, alpha: f32) -> Result<Self> {
        Ok(Self::new(color::contrast(&self.buffer, alpha)?))
    }

    pub fn noise(self, amplitude: i32, seed: u64) -> Result<Self> {
        Ok(Self::new(random::add_noise(&self.buffer, amplitude, seed)?))
    }

    /// [`Augmenter::noise`] with the default seed.
    pub fn noise_default_seed(self, amplitude: i32) -> Result<Self> {
        self.noise(amplitude, DEFAULT_SEED)
    }

    pub fn random_crop(self, out_h: usize, out_w: usize, seed: u64) -> Result<Self> {
        Ok(Self::new(random::random_crop(&self.buffer, out_h, out_w, seed)?))
    }

    pub fn resize_pad(self, config: &ResizeConfig) -> Result<Self> {
        Ok(Self::new(geometry::resize_pad(&self.buffer, config)?))
    }
}

impl From<PixelBuffer> for Augmenter {
    fn from(buffer: PixelBuffer) -> Self {
        Self::new(buffer)
    }
}
