// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared helpers for the integration tests.

#![allow(dead_code)]

use rasteraug_transform::{PixelBuffer, Shape};

/// Install a fmt subscriber honouring `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// `arange(h * w * c).reshape(h, w, c)`, wrapping at 256.
pub fn arange(h: usize, w: usize, c: usize) -> PixelBuffer {
    PixelBuffer::from_fn(Shape::new(h, w, c), |r, col, ch| ((r * w + col) * c + ch) as u8)
        .expect("valid shape")
}
