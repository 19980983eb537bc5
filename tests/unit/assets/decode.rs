use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_dimensions_and_premul() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let prepared = decode_image(&buf).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_garbage_is_a_decode_error() {
    let err = decode_image(b"definitely not a png").unwrap_err();
    assert!(matches!(err, SpriteError::Decode(_)));
}

#[test]
fn unpremultiply_restores_opaque_and_clears_nothing_else() {
    let mut px = vec![10, 20, 30, 255, 0, 0, 0, 0, 64, 32, 0, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..8], &[10, 20, 30, 255, 0, 0, 0, 0]);
    assert_eq!(&px[8..], &[128, 64, 0, 128]);
}

#[test]
fn premultiply_then_unpremultiply_is_close() {
    let original = vec![200u8, 100, 50, 180];
    let mut px = original.clone();
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    for (a, b) in px.iter().zip(&original) {
        assert!(a.abs_diff(*b) <= 1, "{px:?} vs {original:?}");
    }
}
