use super::*;

#[test]
fn nearest_upscale_duplicates_pixels() {
    let src = FrameBatch::from_vec(1, 1, 2, 1, vec![0.0, 1.0]).unwrap();
    let out = resize_batch(&src, 4, 1, Filter::Nearest, ScaleFit::Disabled).unwrap();
    assert_eq!(out.data(), &[0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn constant_images_survive_every_filter() {
    let src = FrameBatch::filled(2, 5, 7, 3, 0.4);
    for filter in [Filter::Nearest, Filter::Bilinear, Filter::Lanczos] {
        let out = resize_batch(&src, 13, 4, filter, ScaleFit::Disabled).unwrap();
        assert_eq!(
            (out.batch(), out.height(), out.width(), out.channels()),
            (2, 4, 13, 3)
        );
        for &v in out.data() {
            assert!((v - 0.4).abs() < 1e-4, "{filter:?} broke a constant: {v}");
        }
    }
}

#[test]
fn identity_resize_shares_buffer() {
    let src = FrameBatch::filled(1, 6, 8, 3, 0.2);
    let out = resize_batch(&src, 8, 6, Filter::Lanczos, ScaleFit::Disabled).unwrap();
    assert!(out.shares_buffer(&src));
}

#[test]
fn bilinear_downscale_averages_neighborhoods() {
    let src = FrameBatch::from_vec(1, 1, 4, 1, vec![0.0, 0.0, 1.0, 1.0]).unwrap();
    let out = resize_batch(&src, 2, 1, Filter::Bilinear, ScaleFit::Disabled).unwrap();
    let (left, right) = (out.data()[0], out.data()[1]);
    assert!(left < 0.5 && right > 0.5);
    assert!((left + right - 1.0).abs() < 1e-5);
}

#[test]
fn zero_target_yields_empty_tensor() {
    let src = FrameBatch::filled(2, 4, 4, 3, 0.9);
    let out = resize_batch(&src, 0, 5, Filter::Lanczos, ScaleFit::Disabled).unwrap();
    assert_eq!((out.batch(), out.height(), out.width(), out.channels()), (2, 5, 0, 3));
    assert!(out.data().is_empty());
}

#[test]
fn disabled_fit_may_change_aspect() {
    let src = FrameBatch::filled(1, 4, 4, 1, 0.5);
    let out = resize_batch(&src, 2, 4, Filter::Bilinear, ScaleFit::Disabled).unwrap();
    assert_eq!((out.height(), out.width()), (4, 2));
}

#[test]
fn center_fit_crops_the_wider_axis() {
    // Left half 0, right half 1 in an 8-wide frame; squaring it to 4x4
    // keeps only the centered columns 2..6.
    let mut data = Vec::new();
    for _ in 0..4 {
        data.extend_from_slice(&[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    }
    let src = FrameBatch::from_vec(1, 4, 8, 1, data).unwrap();
    let out = resize_batch(&src, 4, 4, Filter::Nearest, ScaleFit::Center).unwrap();
    assert_eq!((out.height(), out.width()), (4, 4));
    assert_eq!(out.at(0, 1, 1, 0), 0.0);
    assert_eq!(out.at(0, 1, 2, 0), 1.0);
}

#[test]
fn center_fit_crops_the_taller_axis() {
    let src = FrameBatch::filled(1, 8, 4, 1, 0.3);
    let out = resize_batch(&src, 4, 4, Filter::Bilinear, ScaleFit::Center).unwrap();
    assert_eq!((out.height(), out.width()), (4, 4));
    for &v in out.data() {
        assert!((v - 0.3).abs() < 1e-5);
    }
}
