// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Resize with padding. The canvas is filled with the pad value first, then the
// resized image is drawn into a target rectangle (the whole canvas, or a
// centered aspect-preserving region). Destination pixels are mapped back to
// the source with half-pixel-center sampling:
//
//     src = (q + 0.5) * (P / T) - 0.5
//
// where `q` is the coordinate inside the target rectangle, `T` the target
// extent, and `P` the source extent on that axis.

use rasteraug_core::{Interpolation, PixelBuffer, ResizeConfig, Result, Shape};
use tracing::{debug, instrument};

use crate::sample::round_saturate;

/// Region of the output canvas covered by the resized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRect {
    pub top: usize,
    pub left: usize,
    pub height: usize,
    pub width: usize,
}

/// Resize `img` onto an `out_h x out_w` canvas described by `config`.
///
/// Canvas area outside the target rectangle keeps the pad value. Fails with
/// `InvalidArgument` for a zero canvas extent or a pad outside `[0, 255]`.
#[instrument(skip(img, config), fields(
    shape = %img.shape(),
    out_h = config.out_h,
    out_w = config.out_w,
    keep_aspect = config.keep_aspect,
    interpolation = ?config.interpolation
))]
pub fn resize_pad(img: &PixelBuffer, config: &ResizeConfig) -> Result<PixelBuffer> {
    let pad = config.validate()?;
    let rect = target_rect(img.shape(), config);
    debug!(?rect, "Target rectangle computed");

    let mut out = PixelBuffer::filled(config.out_h, config.out_w, img.channels(), pad)?;
    match config.interpolation {
        Interpolation::Nearest => draw_nearest(img, rect, &mut out),
        Interpolation::Bilinear => draw_bilinear(img, rect, &mut out),
    }
    Ok(out)
}

/// Compute where the resized image lands on the canvas.
///
/// Without `keep_aspect` the image fills the canvas. With it, the source is
/// scaled by `min(out_h / H, out_w / W)`, each side rounded (at least 1), and
/// the result centered with floor division.
pub fn target_rect(source: Shape, config: &ResizeConfig) -> TargetRect {
    if !config.keep_aspect {
        return TargetRect {
            top: 0,
            left: 0,
            height: config.out_h,
            width: config.out_w,
        };
    }

    let scale = (config.out_h as f64 / source.height as f64)
        .min(config.out_w as f64 / source.width as f64);
    let height = scaled_extent(source.height, scale).min(config.out_h);
    let width = scaled_extent(source.width, scale).min(config.out_w);

    TargetRect {
        top: (config.out_h - height) / 2,
        left: (config.out_w - width) / 2,
        height,
        width,
    }
}

fn scaled_extent(extent: usize, scale: f64) -> usize {
    ((extent as f64 * scale).round() as usize).max(1)
}

/// Real-valued source coordinate for destination coordinate `q`.
fn source_coord(q: usize, target: usize, source: usize) -> f64 {
    (q as f64 + 0.5) * (source as f64 / target as f64) - 0.5
}

fn clamp_index(index: i64, source: usize) -> usize {
    index.clamp(0, source as i64 - 1) as usize
}

/// Nearest source index for each destination coordinate on one axis.
fn nearest_taps(target: usize, source: usize) -> Vec<usize> {
    (0..target)
        .map(|q| clamp_index(source_coord(q, target, source).round() as i64, source))
        .collect()
}

/// The two neighbouring source indices and the weight of the second.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LinearTap {
    lo: usize,
    hi: usize,
    frac: f64,
}

fn linear_taps(target: usize, source: usize) -> Vec<LinearTap> {
    (0..target)
        .map(|q| {
            let pos = source_coord(q, target, source);
            let base = pos.floor();
            LinearTap {
                lo: clamp_index(base as i64, source),
                hi: clamp_index(base as i64 + 1, source),
                frac: pos - base,
            }
        })
        .collect()
}

fn draw_nearest(img: &PixelBuffer, rect: TargetRect, out: &mut PixelBuffer) {
    let rows = nearest_taps(rect.height, img.height());
    let cols = nearest_taps(rect.width, img.width());
    let channels = img.channels();
    let out_row_len = out.shape().row_len();
    let dst = out.as_mut_slice();

    for (y, &sy) in rows.iter().enumerate() {
        let row_start = (rect.top + y) * out_row_len + rect.left * channels;
        for (x, &sx) in cols.iter().enumerate() {
            let at = row_start + x * channels;
            dst[at..at + channels].copy_from_slice(img.pixel(sy, sx));
        }
    }
}

fn draw_bilinear(img: &PixelBuffer, rect: TargetRect, out: &mut PixelBuffer) {
    let rows = linear_taps(rect.height, img.height());
    let cols = linear_taps(rect.width, img.width());
    let channels = img.channels();
    let out_row_len = out.shape().row_len();
    let dst = out.as_mut_slice();

    for (y, ty) in rows.iter().enumerate() {
        let row_start = (rect.top + y) * out_row_len + rect.left * channels;
        for (x, tx) in cols.iter().enumerate() {
            let p00 = img.pixel(ty.lo, tx.lo);
            let p01 = img.pixel(ty.lo, tx.hi);
            let p10 = img.pixel(ty.hi, tx.lo);
            let p11 = img.pixel(ty.hi, tx.hi);
            let at = row_start + x * channels;
            for ch in 0..channels {
                let upper = lerp(p00[ch], p01[ch], tx.frac);
                let lower = lerp(p10[ch], p11[ch], tx.frac);
                let value = upper * (1.0 - ty.frac) + lower * ty.frac;
                dst[at + ch] = round_saturate(value);
            }
        }
    }
}

fn lerp(a: u8, b: u8, t: f64) -> f64 {
    f64::from(a) * (1.0 - t) + f64::from(b) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasteraug_core::AugmentError;

    fn numbered(h: usize, w: usize, c: usize) -> PixelBuffer {
        PixelBuffer::from_fn(Shape::new(h, w, c), |r, col, ch| ((r * w + col) * c + ch) as u8)
            .unwrap()
    }

    #[test]
    fn same_size_stretch_is_identity() {
        let img = numbered(4, 5, 3);
        let config = ResizeConfig::new(4, 5).keep_aspect(false);
        assert_eq!(resize_pad(&img, &config).unwrap(), img);
        assert_eq!(resize_pad(&img, &config.bilinear(true)).unwrap(), img);
    }

    #[test]
    fn tall_source_is_centered_with_padding() {
        let img = PixelBuffer::new(2, 1, 3, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let config = ResizeConfig::new(3, 5).keep_aspect(true).pad(7);
        let out = resize_pad(&img, &config).unwrap();

        assert_eq!(out.shape(), Shape::new(3, 5, 3));
        assert_eq!(
            target_rect(img.shape(), &config),
            TargetRect { top: 0, left: 1, height: 3, width: 2 }
        );

        // Source rows map to [0, 1, 1]; the single source column fills both
        // target columns.
        let expected_rows: [[u8; 3]; 3] = [[10, 20, 30], [40, 50, 60], [40, 50, 60]];
        for (y, expected) in expected_rows.iter().enumerate() {
            assert_eq!(out.pixel(y, 0), &[7, 7, 7]);
            assert_eq!(out.pixel(y, 1), expected);
            assert_eq!(out.pixel(y, 2), expected);
            assert_eq!(out.pixel(y, 3), &[7, 7, 7]);
            assert_eq!(out.pixel(y, 4), &[7, 7, 7]);
        }
    }

    #[test]
    fn nearest_downscale_picks_centers() {
        let img = numbered(1, 4, 1);
        let config = ResizeConfig::new(1, 2).keep_aspect(false);
        // (0.5 * 2) - 0.5 = 0.5 -> 1 ; (1.5 * 2) - 0.5 = 2.5 -> 3
        assert_eq!(resize_pad(&img, &config).unwrap().as_slice(), &[1, 3]);
    }

    #[test]
    fn nearest_upscale_repeats_samples() {
        let img = PixelBuffer::new(1, 2, 1, vec![0, 200]).unwrap();
        let config = ResizeConfig::new(1, 4).keep_aspect(false);
        // -0.25, 0.25, 0.75, 1.25 -> 0, 0, 1, 1
        assert_eq!(resize_pad(&img, &config).unwrap().as_slice(), &[0, 0, 200, 200]);
    }

    #[test]
    fn bilinear_upscale_blends_neighbours() {
        let img = PixelBuffer::new(1, 2, 1, vec![0, 200]).unwrap();
        let config = ResizeConfig::new(1, 4).keep_aspect(false).bilinear(true);
        // -0.25 clamps to column 0; 0.25 -> 50; 0.75 -> 150; 1.25 clamps to column 1.
        assert_eq!(resize_pad(&img, &config).unwrap().as_slice(), &[0, 50, 150, 200]);
    }

    #[test]
    fn bilinear_blends_both_axes() {
        let img = PixelBuffer::new(2, 2, 1, vec![0, 100, 100, 200]).unwrap();
        let config = ResizeConfig::new(1, 1).keep_aspect(false).bilinear(true);
        // Center of the 2x2 block: equal weights.
        assert_eq!(resize_pad(&img, &config).unwrap().as_slice(), &[100]);
    }

    #[test]
    fn bilinear_rgb_letterbox_keeps_pad_rows() {
        let img = PixelBuffer::from_fn(Shape::new(2, 3, 3), |r, col, ch| {
            (10 * ((r * 3 + col) * 3 + ch)) as u8
        })
        .unwrap();
        let config = ResizeConfig::new(6, 6).pad(9).bilinear(true);
        assert_eq!(
            target_rect(img.shape(), &config),
            TargetRect { top: 1, left: 0, height: 4, width: 6 }
        );

        // Target rows sample source rows at -0.25, 0.25, 0.75, 1.25, so the
        // two inner rows blend with weights 0.25 and 0.75.
        let out = resize_pad(&img, &config).unwrap();
        let expected: [[u8; 18]; 4] = [
            [0, 10, 20, 8, 18, 28, 23, 33, 43, 38, 48, 58, 53, 63, 73, 60, 70, 80],
            [23, 33, 43, 30, 40, 50, 45, 55, 65, 60, 70, 80, 75, 85, 95, 83, 93, 103],
            [68, 78, 88, 75, 85, 95, 90, 100, 110, 105, 115, 125, 120, 130, 140, 128, 138, 148],
            [
                90, 100, 110, 98, 108, 118, 113, 123, 133, 128, 138, 148, 143, 153, 163, 150, 160,
                170,
            ],
        ];
        assert_eq!(out.row(0), &[9; 18]);
        for (y, row) in expected.iter().enumerate() {
            assert_eq!(out.row(y + 1), row);
        }
        assert_eq!(out.row(5), &[9; 18]);
    }

    #[test]
    fn wide_source_is_letterboxed() {
        let img = PixelBuffer::filled(2, 8, 1, 50).unwrap();
        let config = ResizeConfig::new(4, 4).pad(0);
        let rect = target_rect(img.shape(), &config);
        assert_eq!(rect, TargetRect { top: 1, left: 0, height: 1, width: 4 });

        let out = resize_pad(&img, &config).unwrap();
        assert_eq!(out.row(0), &[0, 0, 0, 0]);
        assert_eq!(out.row(1), &[50, 50, 50, 50]);
        assert_eq!(out.row(2), &[0, 0, 0, 0]);
        assert_eq!(out.row(3), &[0, 0, 0, 0]);
    }

    #[test]
    fn tiny_target_keeps_at_least_one_pixel() {
        let img = PixelBuffer::filled(1, 100, 1, 9).unwrap();
        let rect = target_rect(img.shape(), &ResizeConfig::new(10, 10));
        assert_eq!(rect.height, 1);
        assert_eq!(rect.width, 10);
    }

    #[test]
    fn invalid_config_fails_before_drawing() {
        let img = numbered(2, 2, 1);
        assert!(matches!(
            resize_pad(&img, &ResizeConfig::new(0, 3)),
            Err(AugmentError::InvalidArgument(_))
        ));
        assert!(matches!(
            resize_pad(&img, &ResizeConfig::new(3, 3).pad(300)),
            Err(AugmentError::InvalidArgument(_))
        ));
    }

    #[test]
    fn input_is_not_modified() {
        let img = numbered(3, 3, 3);
        let before = img.clone();
        let _ = resize_pad(&img, &ResizeConfig::new(7, 2).bilinear(true)).unwrap();
        assert_eq!(img, before);
    }
}
