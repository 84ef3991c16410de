// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// rasteraug-transform — deterministic augmentation primitives for 8-bit
// raster buffers.
//
// Provides grayscale conversion and brightness/contrast adjustment (color),
// seeded noise injection and random cropping (random), and aspect-aware
// resize-with-padding (geometry). Every operation is a pure function from an
// input `PixelBuffer` to a freshly allocated output.

pub mod augmenter;
pub mod color;
pub mod geometry;
pub mod interop;
pub mod random;
mod sample;

pub use augmenter::Augmenter;
pub use color::{brightness, contrast, to_gray};
pub use geometry::resize_pad;
pub use random::{DeterministicRng, add_noise, random_crop};

pub use rasteraug_core::{AugmentError, Interpolation, PixelBuffer, ResizeConfig, Result, Shape};
