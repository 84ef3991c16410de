// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometry module — aspect-aware resize onto a padded canvas.

pub mod resize;

pub use resize::{TargetRect, resize_pad, target_rect};
