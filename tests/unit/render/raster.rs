use super::*;

#[test]
fn transparent_raster_is_zeroed() {
    let r = Raster::transparent(3, 2).unwrap();
    assert_eq!(r.data.len(), 3 * 2 * 4);
    assert!(r.data.iter().all(|&b| b == 0));
    assert_eq!(r.pixel(2, 1), Some([0, 0, 0, 0]));
    assert_eq!(r.pixel(3, 0), None);
}

#[test]
fn oversized_raster_is_refused_before_allocating() {
    assert!(matches!(
        Raster::transparent(u32::MAX, u32::MAX),
        Err(SpriteError::Geometry(_))
    ));
    assert!(matches!(
        Raster::transparent(8193, 8192),
        Err(SpriteError::Geometry(_))
    ));
}

#[test]
fn encode_png_round_trips_straight_alpha() {
    let mut r = Raster::transparent(2, 1).unwrap();
    // premultiplied half-transparent red, opaque blue
    r.data.copy_from_slice(&[128, 0, 0, 128, 0, 0, 255, 255]);

    let png = r.encode_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 255, 255]);
}

#[test]
fn encode_rejects_empty_raster() {
    let r = Raster::transparent(0, 5).unwrap();
    assert!(matches!(r.encode_png(), Err(SpriteError::Encode(_))));
}
