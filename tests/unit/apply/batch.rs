use super::*;
use crate::{
    apply::pixel::apply_rgba8,
    foundation::core::Size,
    matrix::catalog::BuiltinMatrix,
};

fn gradient(width: u32, height: u32) -> Image {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[
                (x * 7 % 256) as u8,
                (y * 13 % 256) as u8,
                ((x + y) * 3 % 256) as u8,
                ((x * y) % 256) as u8,
            ]);
        }
    }
    Image::from_rgba8(width, height, data).unwrap()
}

#[test]
fn output_keeps_dimensions_and_source_is_untouched() {
    let src = gradient(37, 21);
    let before = src.deep_copy();
    let out = apply_to_image(&src, &BuiltinMatrix::Sepia.matrix());
    assert_eq!(out.size(), src.size());
    assert_eq!(src, before);
    assert!(!out.shares_pixels(&src));
}

#[test]
fn every_pixel_matches_single_pixel_application() {
    let src = gradient(9, 5);
    let m = BuiltinMatrix::NegativeHueShift180Variation3.matrix();
    let out = apply_to_image(&src, &m);
    for y in 0..src.height() {
        for x in 0..src.width() {
            let want = apply_rgba8(src.pixel(x, y).unwrap(), &m);
            assert_eq!(out.pixel(x, y), Some(want));
        }
    }
}

#[test]
fn parallel_and_serial_agree_byte_for_byte() {
    let src = gradient(64, 47);
    let m = BuiltinMatrix::NegativeGrayScale.matrix();

    let serial = apply_to_image_with(&src, &m, &ApplyThreading::serial()).unwrap();
    let pooled = apply_to_image_with(
        &src,
        &m,
        &ApplyThreading {
            parallel: true,
            rows_per_chunk: 3,
            threads: Some(2),
        },
    )
    .unwrap();
    let global = apply_to_image_with(&src, &m, &ApplyThreading::default()).unwrap();

    assert_eq!(serial, pooled);
    assert_eq!(serial, global);
    assert_eq!(serial, apply_to_image(&src, &m));
}

#[test]
fn zero_threads_is_rejected() {
    let src = gradient(2, 2);
    let err = apply_to_image_with(
        &src,
        &ColorMatrix::IDENTITY,
        &ApplyThreading {
            threads: Some(0),
            ..ApplyThreading::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, ViewerError::Validation(_)));
}

#[test]
fn zero_rows_per_chunk_still_covers_image() {
    let src = gradient(5, 4);
    let out = apply_to_image_with(
        &src,
        &ColorMatrix::IDENTITY,
        &ApplyThreading {
            rows_per_chunk: 0,
            ..ApplyThreading::default()
        },
    )
    .unwrap();
    assert_eq!(out, src);
}

#[test]
fn empty_images_pass_through() {
    let src = Image::filled(Size::new(0, 3), [0, 0, 0, 0]).unwrap();
    let out = apply_to_image(&src, &BuiltinMatrix::Negative.matrix());
    assert_eq!(out.size(), Size::new(0, 3));
    assert!(out.as_rgba8().is_empty());
}

#[test]
fn threading_deserializes_with_defaults() {
    let t: ApplyThreading = serde_json::from_str(r#"{ "threads": 4 }"#).unwrap();
    assert!(t.parallel);
    assert_eq!(t.rows_per_chunk, 16);
    assert_eq!(t.threads, Some(4));
}

#[test]
fn oversized_chunks_cover_the_whole_image() {
    let img = gradient(4, 4);
    let m = BuiltinMatrix::Sepia.matrix();
    let huge = ApplyThreading {
        rows_per_chunk: usize::MAX,
        ..ApplyThreading::default()
    };
    let out = apply_to_image_with(&img, &m, &huge).unwrap();
    assert_eq!(out, apply_to_image_with(&img, &m, &ApplyThreading::serial()).unwrap());
}

#[test]
fn default_path_matches_default_threading() {
    let img = gradient(19, 41);
    let m = BuiltinMatrix::NegativeSepia.matrix();
    let with_defaults = apply_to_image_with(&img, &m, &ApplyThreading::default()).unwrap();
    assert_eq!(apply_to_image(&img, &m), with_defaults);
}
