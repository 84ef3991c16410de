// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Resize configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AugmentError, Result};
use crate::types::Interpolation;

/// Parameters for `resize_pad`.
///
/// `pad` is kept as a wide integer so that out-of-range fill values coming
/// from a binding layer are reported rather than silently truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Output canvas height.
    pub out_h: usize,
    /// Output canvas width.
    pub out_w: usize,
    /// Preserve the source aspect ratio and center it on the canvas.
    pub keep_aspect: bool,
    /// Fill value for canvas area not covered by the resized image (0-255).
    pub pad: i32,
    /// Resampling strategy.
    pub interpolation: Interpolation,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            out_h: 0,
            out_w: 0,
            keep_aspect: true,
            pad: 0,
            interpolation: Interpolation::Nearest,
        }
    }
}

impl ResizeConfig {
    /// Config for an `out_h x out_w` canvas with the default options.
    pub fn new(out_h: usize, out_w: usize) -> Self {
        Self {
            out_h,
            out_w,
            ..Default::default()
        }
    }

    pub fn keep_aspect(mut self, keep_aspect: bool) -> Self {
        self.keep_aspect = keep_aspect;
        self
    }

    pub fn pad(mut self, pad: i32) -> Self {
        self.pad = pad;
        self
    }

    pub fn bilinear(mut self, bilinear: bool) -> Self {
        self.interpolation = Interpolation::from_bilinear_flag(bilinear);
        self
    }

    /// Check the canvas extent and pad value, returning the pad as a sample.
    pub fn validate(&self) -> Result<u8> {
        if self.out_h == 0 || self.out_w == 0 {
            return Err(AugmentError::argument(format!(
                "out_h and out_w must be > 0 (got {}x{})",
                self.out_h, self.out_w
            )));
        }
        u8::try_from(self.pad).map_err(|_| {
            AugmentError::argument(format!("pad must be in [0, 255] (got {})", self.pad))
        })
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }
}
