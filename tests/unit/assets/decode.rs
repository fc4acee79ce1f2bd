use std::io::Cursor;

use super::*;
use crate::foundation::core::Size;

#[test]
fn decode_image_png_keeps_straight_alpha() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba.clone()).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.size(), Size::new(1, 1));
    assert_eq!(decoded.as_rgba8(), src_rgba.as_slice());
}

#[test]
fn decode_garbage_is_err() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn encode_png_round_trips() {
    let img = Image::test_pattern(Size::new(24, 12));
    let bytes = encode_png(&img).unwrap();
    let back = decode_image(&bytes).unwrap();
    assert_eq!(back, img);
}

#[test]
fn load_missing_file_reports_path() {
    let err = load_image("target/definitely/missing.png").unwrap_err();
    assert!(format!("{err:#}").contains("missing.png"));
}

#[test]
fn save_png_creates_parent_dirs() {
    let dir = std::path::PathBuf::from("target").join("decode_unit");
    let _ = std::fs::remove_dir_all(&dir);
    let out = dir.join("nested").join("out.png");

    let img = Image::filled(Size::new(2, 3), [1, 2, 3, 255]).unwrap();
    save_png(&img, &out).unwrap();
    assert_eq!(load_image(&out).unwrap(), img);
}
