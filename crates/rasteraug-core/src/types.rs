// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Small shared domain types.

use serde::{Deserialize, Serialize};

/// Seed used when a caller does not supply one.
pub const DEFAULT_SEED: u64 = 0;

/// Logical shape of a pixel buffer: height, width, interleaved channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl Shape {
    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// Total number of samples (`H * W * C`), or `None` on overflow.
    pub fn sample_count(&self) -> Option<usize> {
        self.height
            .checked_mul(self.width)?
            .checked_mul(self.channels)
    }

    /// Samples in one row (`W * C`).
    pub fn row_len(&self) -> usize {
        self.width * self.channels
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.channels)
    }
}

/// Resampling strategy used by `resize_pad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Copy the closest source sample.
    #[default]
    Nearest,
    /// Blend the four surrounding source samples.
    Bilinear,
}

impl Interpolation {
    /// Map the binding-level `bilinear` flag onto a mode.
    pub fn from_bilinear_flag(bilinear: bool) -> Self {
        if bilinear {
            Interpolation::Bilinear
        } else {
            Interpolation::Nearest
        }
    }
}
