//! End-to-end collage tests: encoded sources in, decoded PNG out.

use std::io::Cursor;

use image::{Rgba, RgbaImage};

use collage_render::{CollageError, CollageOptions, create_collage};

const GRAY: Rgba<u8> = Rgba([0x33, 0x33, 0x33, 0xff]);

/// Encode a solid-color PNG source.
fn png_source(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbaImage::from_pixel(width, height, color)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// Distinct color per source index.
fn palette(index: u8) -> Rgba<u8> {
    Rgba([index * 25, 120, 255 - index * 25, 255])
}

#[test]
fn four_image_collage_fills_a_square_canvas() {
    // Width 1000, border 30: four 455x455 tiles at origins 30 and 515.
    let sources: Vec<Vec<u8>> = (0..4).map(|i| png_source(64, 64, palette(i))).collect();
    let bytes = create_collage(&sources, &CollageOptions::new(1000.0)).unwrap();

    let canvas = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(canvas.dimensions(), (1000, 1000));

    // Tile centers carry their source's color, in input order.
    assert_eq!(*canvas.get_pixel(257, 257), palette(0));
    assert_eq!(*canvas.get_pixel(742, 257), palette(1));
    assert_eq!(*canvas.get_pixel(257, 742), palette(2));
    assert_eq!(*canvas.get_pixel(742, 742), palette(3));

    // Outer border and the gaps between tiles stay border-colored.
    assert_eq!(*canvas.get_pixel(0, 0), GRAY);
    assert_eq!(*canvas.get_pixel(500, 500), GRAY);
    assert_eq!(*canvas.get_pixel(999, 999), GRAY);
}

#[test]
fn nine_image_collage_preserves_input_order() {
    // Width 900, border 30: 3x3 grid of 260px tiles at origins 30/320/610.
    let sources: Vec<Vec<u8>> = (0..9).map(|i| png_source(48, 48, palette(i))).collect();
    let bytes = create_collage(&sources, &CollageOptions::new(900.0)).unwrap();

    let canvas = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(canvas.dimensions(), (900, 900));

    let centers = [160, 450, 740];
    for (i, expected) in (0..9u8).map(palette).enumerate() {
        let x = centers[i % 3];
        let y = centers[i / 3];
        assert_eq!(*canvas.get_pixel(x, y), expected, "slot {i}");
    }
}

#[test]
fn single_image_collage_keeps_aspect_ratio() {
    // 400x300 at width 100, border 10: 80x60 tile, canvas 100x80.
    let sources = vec![png_source(400, 300, palette(1))];
    let options = CollageOptions::new(100.0).with_border_width(10.0);
    let bytes = create_collage(&sources, &options).unwrap();

    let canvas = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(canvas.dimensions(), (100, 80));
    assert_eq!(*canvas.get_pixel(50, 40), palette(1));
    assert_eq!(*canvas.get_pixel(50, 75), GRAY);
}

#[test]
fn landscape_and_portrait_sources_crop_to_their_centers() {
    // A landscape source with a colored center stripe: the centered square
    // crop keeps the stripe, discarding the left and right margins.
    let mut landscape = RgbaImage::from_pixel(90, 30, Rgba([255, 0, 0, 255]));
    for y in 0..30 {
        for x in 30..60 {
            landscape.put_pixel(x, y, Rgba([0, 255, 0, 255]));
        }
    }
    let mut left_bytes = Vec::new();
    landscape
        .write_to(&mut Cursor::new(&mut left_bytes), image::ImageFormat::Png)
        .unwrap();

    let sources = vec![left_bytes, png_source(30, 30, palette(2))];
    let options = CollageOptions::new(100.0).with_border_width(10.0);
    let bytes = create_collage(&sources, &options).unwrap();

    let canvas = image::load_from_memory(&bytes).unwrap().to_rgba8();
    // The whole first tile is the green center stripe.
    assert_eq!(*canvas.get_pixel(12, 12), Rgba([0, 255, 0, 255]));
    assert_eq!(*canvas.get_pixel(43, 43), Rgba([0, 255, 0, 255]));
}

#[test]
fn corrupt_input_aborts_the_whole_request() {
    let mut sources: Vec<Vec<u8>> = (0..5).map(|i| png_source(32, 32, palette(i))).collect();
    sources.insert(3, b"definitely not an image".to_vec());

    let err = create_collage(&sources, &CollageOptions::new(600.0)).unwrap_err();
    assert!(matches!(err, CollageError::Decode { index: 3, .. }));
}

#[test]
fn ten_sources_fail_before_any_decode() {
    let sources = vec![b"unreadable".to_vec(); 10];
    let err = create_collage(&sources, &CollageOptions::new(600.0)).unwrap_err();
    assert!(matches!(err, CollageError::Layout(_)));
}

#[test]
fn identical_requests_encode_identical_bytes() {
    let sources: Vec<Vec<u8>> = (0..3).map(|i| png_source(40, 40, palette(i))).collect();
    let options = CollageOptions::new(600.0);

    let first = create_collage(&sources, &options).unwrap();
    let second = create_collage(&sources, &options).unwrap();
    assert_eq!(first, second);
}
