use super::*;

fn png_bytes(img: image::DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn opaque_sources_decode_to_three_channels() {
    let img = image::RgbImage::from_pixel(4, 2, image::Rgb([255, 0, 128]));
    let fb = decode_image(&png_bytes(img.into())).unwrap();
    assert_eq!((fb.batch(), fb.height(), fb.width(), fb.channels()), (1, 2, 4, 3));
    assert_eq!(fb.at(0, 0, 0, 0), 1.0);
    assert_eq!(fb.at(0, 0, 0, 1), 0.0);
    assert!((fb.at(0, 1, 3, 2) - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn alpha_sources_decode_to_four_channels() {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 128]));
    let fb = decode_image(&png_bytes(img.into())).unwrap();
    assert_eq!(fb.channels(), 4);
    assert!((fb.at(0, 0, 0, 3) - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    assert!(matches!(
        decode_image(b"not an image"),
        Err(StitchError::Other(_))
    ));
}

#[test]
fn frame_rgba8_quantizes_and_clamps() {
    let fb = FrameBatch::from_vec(1, 1, 2, 4, vec![0.0, 0.5, 1.0, 1.0, -0.3, 0.25, 1.7, 0.0])
        .unwrap();
    let bytes = frame_rgba8(&fb, 0).unwrap();
    assert_eq!(bytes, vec![0, 128, 255, 255, 0, 64, 255, 0]);
}

#[test]
fn frame_rgba8_gives_rgb_an_opaque_alpha() {
    let fb = FrameBatch::filled(2, 1, 2, 3, 0.5);
    let bytes = frame_rgba8(&fb, 1).unwrap();
    assert_eq!(bytes, vec![128, 128, 128, 255, 128, 128, 128, 255]);
}

#[test]
fn frame_rgba8_rejects_bad_inputs() {
    let two_channel = FrameBatch::filled(1, 1, 1, 2, 0.5);
    assert!(matches!(
        frame_rgba8(&two_channel, 0),
        Err(StitchError::Encode(_))
    ));

    let fb = FrameBatch::filled(1, 1, 1, 3, 0.5);
    assert!(matches!(frame_rgba8(&fb, 1), Err(StitchError::Validation(_))));
}
