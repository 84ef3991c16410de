// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Saturating conversions from wide intermediates back to 8-bit samples.

/// Clamp an integer into `[0, 255]`.
#[inline]
pub(crate) fn saturate(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Round half away from zero, then clamp into `[0, 255]`.
///
/// NaN maps to 0.
#[inline]
pub(crate) fn round_saturate(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
