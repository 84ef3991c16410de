// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Color module — grayscale reduction and pointwise brightness/contrast.

pub mod adjust;
pub mod gray;

pub use adjust::{brightness, contrast};
pub use gray::to_gray;
