// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rasteraug — pixel buffer, configuration, and error types shared by all crates.

pub mod buffer;
pub mod config;
pub mod error;
pub mod types;

pub use buffer::PixelBuffer;
pub use config::ResizeConfig;
pub use error::{AugmentError, ErrorClass, Result};
pub use types::*;
