use approx::assert_abs_diff_eq;

use super::*;
use crate::matrix::{catalog::BuiltinMatrix, color_matrix::multiply};

fn assert_px_close(got: RgbaF32, want: RgbaF32) {
    for (g, w) in got.iter().zip(want) {
        assert_abs_diff_eq!(*g, w, epsilon = 1e-5);
    }
}

#[test]
fn identity_leaves_pixels_untouched() {
    for px in [
        [0.0, 0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0, 1.0],
        [0.2, 0.4, 0.6, 0.8],
    ] {
        assert_px_close(apply_pixel(px, &ColorMatrix::IDENTITY), px);
    }
    for v in 0u8..=255 {
        let px = [v, 255 - v, v / 2, v];
        assert_eq!(apply_rgba8(px, &ColorMatrix::IDENTITY), px);
    }
}

#[test]
fn double_negative_restores_rgb_and_keeps_alpha() {
    let neg = BuiltinMatrix::Negative.matrix();
    let twice = multiply(&neg, &neg);
    for px in [[10u8, 200, 77, 255], [0, 0, 0, 0], [255, 128, 1, 64]] {
        assert_eq!(apply_rgba8(px, &twice), px);
    }
    assert_px_close(apply_pixel([0.1, 0.5, 0.9, 0.3], &twice), [0.1, 0.5, 0.9, 0.3]);
}

#[test]
fn negative_inverts_rgb_only() {
    let neg = BuiltinMatrix::Negative.matrix();
    assert_eq!(apply_rgba8([0, 255, 100, 42], &neg), [255, 0, 155, 42]);
}

#[test]
fn gray_scale_of_pure_red() {
    let out = apply_pixel([1.0, 0.0, 0.0, 1.0], &BuiltinMatrix::GrayScale.matrix());
    assert_px_close(out, [0.3, 0.3, 0.3, 1.0]);
}

#[test]
fn gray_scale_weights_sum_per_output_channel() {
    let out = apply_pixel([0.5, 0.5, 0.5, 1.0], &BuiltinMatrix::GrayScale.matrix());
    assert_px_close(out, [0.5, 0.5, 0.5, 1.0]);
}

#[test]
fn overflow_saturates_per_channel() {
    // pure red through the inversion+hue-shift overflows below zero on green and blue
    let m = BuiltinMatrix::NegativeHueShift180.matrix();
    let out = apply_pixel([1.0, 0.0, 0.0, 1.0], &m);
    for c in out {
        assert!((0.0..=1.0).contains(&c));
    }
    assert_abs_diff_eq!(out[3], 1.0);

    let boost = ColorMatrix::new([
        [4.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, -4.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]);
    assert_eq!(apply_rgba8([128, 128, 128, 255], &boost), [255, 0, 128, 255]);
}

#[test]
fn bias_row_adds_constant() {
    let mut m = ColorMatrix::IDENTITY;
    m.set(4, 2, 0.5);
    assert_px_close(apply_pixel([0.0, 0.0, 0.25, 1.0], &m), [0.0, 0.0, 0.75, 1.0]);
}

#[test]
fn nan_inputs_collapse_to_zero() {
    let out = apply_pixel([f32::NAN, 0.5, 0.5, 1.0], &ColorMatrix::IDENTITY);
    assert_eq!(out[0], 0.0);
}

#[test]
fn slice_helper_matches_per_pixel_path() {
    let m = BuiltinMatrix::Sepia.matrix();
    let src = [10u8, 20, 30, 255, 200, 150, 100, 128];
    let mut dst = [0u8; 8];
    apply_rgba8_slice(&src, &mut dst, &m);
    assert_eq!(dst[..4], apply_rgba8([10, 20, 30, 255], &m));
    assert_eq!(dst[4..], apply_rgba8([200, 150, 100, 128], &m));
}
