// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Deterministic random stream built on ChaCha8.
//
// ChaCha is counter-based: its output is a pure function of (key, stream id,
// block counter). The key is expanded from the caller's seed, the stream id
// selects an independent sub-stream, and the counter is the position. Two
// generators built from the same (seed, stream) and consumed in the same
// order yield identical draws on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A reproducible random stream identified by `(seed, stream)`.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl DeterministicRng {
    /// Stream 0 for `seed`, positioned at its start.
    pub fn new(seed: u64) -> Self {
        Self::with_stream(seed, 0)
    }

    /// Stream `stream` for `seed`, positioned at its start.
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(seed);
        inner.set_stream(stream);
        Self { seed, inner }
    }

    /// An independent stream derived from this generator's seed and `index`.
    ///
    /// The result does not depend on how much of `self` has been consumed,
    /// so workers may derive sub-streams in any order.
    pub fn substream(&self, index: u64) -> Self {
        Self::with_stream(self.seed, index)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stream(&self) -> u64 {
        self.inner.get_stream()
    }

    /// Number of 32-bit words consumed so far.
    pub fn position(&self) -> u128 {
        self.inner.get_word_pos()
    }

    /// Uniform integer in `[lo, hi]`, inclusive on both ends.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn uniform_int(&mut self, lo: i64, hi: i64) -> i64 {
        self.inner.random_range(lo..=hi)
    }

    /// Uniform real in `[0, 1)`.
    pub fn uniform_real(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}
