use super::*;

#[test]
fn sinc_peaks_at_zero() {
    assert_eq!(sinc(0.0), 1.0);
    assert!(sinc(1.0).abs() < 1e-6);
    assert!(sinc(2.0).abs() < 1e-6);
}

#[test]
fn lanczos3_hits_integer_zero_crossings() {
    assert_eq!(lanczos3(0.0), 1.0);
    assert!(lanczos3(1.0).abs() < 1e-6);
    assert!(lanczos3(2.0).abs() < 1e-6);
    assert_eq!(lanczos3(3.0), 0.0);
    assert_eq!(lanczos3(-4.5), 0.0);
}

#[test]
fn triangle_is_a_tent() {
    assert_eq!(triangle(0.0), 1.0);
    assert_eq!(triangle(0.5), 0.5);
    assert_eq!(triangle(-0.5), 0.5);
    assert_eq!(triangle(1.0), 0.0);
}
