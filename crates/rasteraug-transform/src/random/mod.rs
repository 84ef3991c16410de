// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Seeded transforms — the deterministic generator, additive noise, and random
// cropping. No process-wide randomness is ever consulted: every call builds
// its own stream from an explicit seed.

pub mod crop;
pub mod noise;
pub mod rng;

pub use crop::random_crop;
pub use noise::add_noise;
pub use rng::DeterministicRng;
