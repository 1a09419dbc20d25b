/// Normalized sinc, `sin(pi x) / (pi x)`.
pub(crate) fn sinc(x: f32) -> f32 {
    if x == 0.0 {
        return 1.0;
    }
    let px = std::f32::consts::PI * x;
    px.sin() / px
}

/// Lanczos kernel with a 3-lobe window. Zero outside `|x| < 3`.
pub(crate) fn lanczos3(x: f32) -> f32 {
    let x = x.abs();
    if x >= 3.0 {
        return 0.0;
    }
    sinc(x) * sinc(x / 3.0)
}

/// Triangle (tent) kernel with unit support.
pub(crate) fn triangle(x: f32) -> f32 {
    let x = x.abs();
    if x >= 1.0 { 0.0 } else { 1.0 - x }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
