// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel buffer — the dense, row-major, channel-interleaved 8-bit image every
// transform consumes and produces.

use std::ops::Index;

use crate::error::{AugmentError, Result};
use crate::types::Shape;

/// Channel counts a buffer may carry: grayscale or RGB.
pub const SUPPORTED_CHANNELS: [usize; 2] = [1, 3];

/// An owned `H x W x C` image of `u8` samples.
///
/// Invariants, checked by every constructor:
/// - `H >= 1` and `W >= 1`
/// - `C` is 1 or 3
/// - `data.len() == H * W * C`
///
/// Transforms never mutate their input; each returns a freshly allocated
/// buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    shape: Shape,
    data: Vec<u8>,
}

/// Check the `H`, `W`, `C` part of the invariants.
pub fn validate_shape(shape: Shape) -> Result<()> {
    if shape.height == 0 || shape.width == 0 {
        return Err(AugmentError::shape(format!(
            "H and W must be > 0 (got {shape})"
        )));
    }
    if !SUPPORTED_CHANNELS.contains(&shape.channels) {
        return Err(AugmentError::shape(format!(
            "channel dimension C must be 1 or 3 (got {})",
            shape.channels
        )));
    }
    if shape.sample_count().is_none() {
        return Err(AugmentError::shape(format!("{shape} overflows usize")));
    }
    Ok(())
}

impl PixelBuffer {
    // -- Construction ---------------------------------------------------------

    /// Wrap `data` as an `height x width x channels` buffer.
    pub fn new(height: usize, width: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let shape = Shape::new(height, width, channels);
        validate_shape(shape)?;
        let expected = shape.sample_count().unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(AugmentError::shape(format!(
                "buffer length {} does not match {shape} ({expected} samples)",
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    /// Allocate a buffer with every sample set to `value`.
    pub fn filled(height: usize, width: usize, channels: usize, value: u8) -> Result<Self> {
        let shape = Shape::new(height, width, channels);
        validate_shape(shape)?;
        let len = shape.sample_count().unwrap_or(0);
        Ok(Self {
            shape,
            data: vec![value; len],
        })
    }

    /// Allocate a zero-filled buffer.
    pub fn zeros(height: usize, width: usize, channels: usize) -> Result<Self> {
        Self::filled(height, width, channels, 0)
    }

    /// Build a buffer by evaluating `f(row, col, channel)` for every sample in
    /// row-major, channel-interleaved order.
    pub fn from_fn<F>(shape: Shape, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> u8,
    {
        validate_shape(shape)?;
        let mut data = Vec::with_capacity(shape.sample_count().unwrap_or(0));
        for row in 0..shape.height {
            for col in 0..shape.width {
                for channel in 0..shape.channels {
                    data.push(f(row, col, channel));
                }
            }
        }
        Ok(Self { shape, data })
    }

    /// Apply `f` to every sample, producing a new buffer of the same shape.
    pub fn map_samples<F>(&self, f: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        Self {
            shape: self.shape,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn height(&self) -> usize {
        self.shape.height
    }

    pub fn width(&self) -> usize {
        self.shape.width
    }

    pub fn channels(&self) -> usize {
        self.shape.channels
    }

    /// Checked read of the sample at (`row`, `col`, `channel`).
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        if row >= self.shape.height || col >= self.shape.width || channel >= self.shape.channels
        {
            return None;
        }
        Some(self.data[self.offset(row, col) + channel])
    }

    /// All channels of the pixel at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the buffer.
    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        let start = self.offset(row, col);
        &self.data[start..start + self.shape.channels]
    }

    /// One full row of interleaved samples.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[u8] {
        let len = self.shape.row_len();
        &self.data[row * len..(row + 1) * len]
    }

    /// The raw samples, row-major and channel-interleaved.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the samples of a buffer the caller owns.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its samples.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.shape.width + col) * self.shape.channels
    }
}

impl Index<(usize, usize, usize)> for PixelBuffer {
    type Output = u8;

    fn index(&self, (row, col, channel): (usize, usize, usize)) -> &u8 {
        assert!(
            row < self.shape.height && col < self.shape.width && channel < self.shape.channels,
            "sample ({row}, {col}, {channel}) out of bounds for {}",
            self.shape
        );
        &self.data[self.offset(row, col) + channel]
    }
}
