use crate::{
    foundation::math::{saturate_unit, u8_to_unit, unit_to_u8},
    matrix::color_matrix::ColorMatrix,
};

/// Straight-alpha RGBA with channels normalized to `[0, 1]`.
pub type RgbaF32 = [f32; 4];

/// Apply `m` to one normalized pixel.
///
/// Computes `[R' G' B' A' 1] = [R G B A 1] · m`, then saturates every output channel into
/// `[0, 1]` on its own. Values are never wrapped and channels are never renormalized against
/// each other, so overflow-prone matrices lose saturation on pure colors instead of shifting
/// hue.
pub fn apply_pixel(px: RgbaF32, m: &ColorMatrix) -> RgbaF32 {
    let rows = m.rows();
    let mut out = [0.0f32; 4];
    for (j, channel) in out.iter_mut().enumerate() {
        let v = px[0] * rows[0][j]
            + px[1] * rows[1][j]
            + px[2] * rows[2][j]
            + px[3] * rows[3][j]
            + rows[4][j];
        *channel = saturate_unit(v);
    }
    out
}

/// Apply `m` to one 8-bit pixel, working in normalized space and rounding back to nearest.
pub fn apply_rgba8(px: [u8; 4], m: &ColorMatrix) -> [u8; 4] {
    let unit = [
        u8_to_unit(px[0]),
        u8_to_unit(px[1]),
        u8_to_unit(px[2]),
        u8_to_unit(px[3]),
    ];
    apply_pixel(unit, m).map(unit_to_u8)
}

pub(crate) fn apply_rgba8_slice(src: &[u8], dst: &mut [u8], m: &ColorMatrix) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = apply_rgba8([s[0], s[1], s[2], s[3]], m);
        d.copy_from_slice(&out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/apply/pixel.rs"]
mod tests;
