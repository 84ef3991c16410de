// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Additive uniform integer noise.

use rasteraug_core::{AugmentError, PixelBuffer, Result};
use rayon::prelude::*;
use tracing::{debug, instrument};

use super::rng::DeterministicRng;
use crate::sample::saturate;

/// Add an integer offset drawn uniformly from `[-amplitude, amplitude]` to
/// every sample, saturating at 0 and 255.
///
/// Rows are processed in parallel. Row `r` draws from sub-stream `r` of
/// `seed`, one draw per sample in channel-interleaved order, so the output
/// depends only on `(img, amplitude, seed)` and never on thread scheduling.
///
/// `amplitude == 0` returns an exact copy for every seed. A negative
/// amplitude is rejected.
#[instrument(skip(img), fields(shape = %img.shape()))]
pub fn add_noise(img: &PixelBuffer, amplitude: i32, seed: u64) -> Result<PixelBuffer> {
    if amplitude < 0 {
        return Err(AugmentError::argument(format!(
            "noise amplitude must be >= 0 (got {amplitude})"
        )));
    }
    if amplitude == 0 {
        debug!("Zero amplitude; copying input");
        return Ok(img.clone());
    }

    let amp = i64::from(amplitude);
    let base = DeterministicRng::new(seed);
    let row_len = img.shape().row_len();

    let mut out = img.clone();
    out.as_mut_slice()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, samples)| {
            let mut rng = base.substream(row as u64);
            for sample in samples.iter_mut() {
                let offset = rng.uniform_int(-amp, amp);
                *sample = saturate(i64::from(*sample) + offset);
            }
        });

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> PixelBuffer {
        PixelBuffer::from_fn(rasteraug_core::Shape::new(8, 6, 3), |r, c, ch| {
            (r * 30 + c * 5 + ch) as u8
        })
        .unwrap()
    }

    #[test]
    fn zero_amplitude_is_exact_copy() {
        let img = PixelBuffer::new(2, 2, 3, (0..12).collect()).unwrap();
        for seed in [0, 1, 123, u64::MAX] {
            assert_eq!(add_noise(&img, 0, seed).unwrap(), img);
        }
    }

    #[test]
    fn negative_amplitude_is_rejected() {
        let img = gradient();
        assert!(matches!(add_noise(&img, -1, 0), Err(AugmentError::InvalidArgument(_))));
    }

    #[test]
    fn same_seed_reproduces() {
        let img = gradient();
        assert_eq!(add_noise(&img, 10, 77).unwrap(), add_noise(&img, 10, 77).unwrap());
    }

    #[test]
    fn different_seeds_differ() {
        let img = gradient();
        assert_ne!(add_noise(&img, 10, 1).unwrap(), add_noise(&img, 10, 2).unwrap());
    }

    #[test]
    fn offsets_stay_within_amplitude() {
        let img = PixelBuffer::filled(16, 16, 1, 128).unwrap();
        let noisy = add_noise(&img, 5, 3).unwrap();
        assert!(noisy.as_slice().iter().all(|&v| (123..=133).contains(&v)));
        assert!(noisy.as_slice().iter().any(|&v| v != 128));
    }

    #[test]
    fn large_amplitude_saturates() {
        let img = PixelBuffer::filled(4, 4, 3, 128).unwrap();
        let noisy = add_noise(&img, i32::MAX, 11).unwrap();
        assert_eq!(noisy.shape(), img.shape());
    }

    #[test]
    fn matches_sequential_row_substreams() {
        let img = gradient();
        let noisy = add_noise(&img, 7, 2024).unwrap();

        let base = DeterministicRng::new(2024);
        let mut expected = Vec::new();
        for row in 0..img.height() {
            let mut rng = base.substream(row as u64);
            for &v in img.row(row) {
                expected.push(saturate(i64::from(v) + rng.uniform_int(-7, 7)));
            }
        }
        assert_eq!(noisy.as_slice(), expected.as_slice());
    }

    #[test]
    fn seed_7_output_is_pinned() {
        let img = PixelBuffer::new(2, 3, 3, (0..18).collect()).unwrap();
        let noisy = add_noise(&img, 5, 7).unwrap();
        assert_eq!(
            noisy.as_slice(),
            [0, 0, 4, 5, 5, 3, 1, 11, 7, 14, 5, 13, 12, 8, 15, 15, 18, 22]
        );
    }

    #[test]
    fn thread_count_does_not_change_result() {
        let img = gradient();
        let run = |threads: usize| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| add_noise(&img, 20, 99).unwrap())
        };
        assert_eq!(run(1), run(4));
    }
}
