/// Round to the nearest integer, halves away from zero, saturating at the `i32` range.
///
/// `f64::round` already rounds halves away from zero; this only adds the saturating cast.
pub(crate) fn round_half_away(v: f64) -> i32 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// Saturate a normalized channel into `[0, 1]`. NaN maps to `0`.
pub(crate) fn saturate_unit(v: f32) -> f32 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

/// Normalized channel to 8-bit, saturating then rounding to nearest.
pub(crate) fn unit_to_u8(v: f32) -> u8 {
    (saturate_unit(v) * 255.0).round() as u8
}

pub(crate) fn u8_to_unit(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// Round `v` to `digits` significant figures.
pub(crate) fn round_significant(v: f64, digits: i32) -> f64 {
    if v == 0.0 || !v.is_finite() {
        return v;
    }
    let magnitude = v.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits - 1 - magnitude);
    (v * scale).round() / scale
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
