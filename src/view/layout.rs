use crate::foundation::{
    core::{Rect, Size},
    math::round_half_away,
};

/// Horizontal split of the displayed image at the splitter.
///
/// Right-hand widths are remainders of the left-hand ones, so the halves always tile the
/// full width with no gap and no overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SplitWidths {
    /// Destination width of the first (left) image portion.
    pub left_dest_width: i32,
    /// Source width taken from the first image.
    pub left_src_width: i32,
    /// Destination width of the second (right) image portion.
    pub right_dest_width: i32,
    /// Source width taken from the second image.
    pub right_src_width: i32,
}

/// The two blits that make up one split-view frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SplitRects {
    /// Source rectangle in the first image.
    pub first_src: Rect,
    /// Destination rectangle for the first image.
    pub first_dst: Rect,
    /// Source rectangle in the second image.
    pub second_src: Rect,
    /// Destination rectangle for the second image.
    pub second_dst: Rect,
}

/// Fit `image` inside `viewport`, preserving aspect ratio, centered.
///
/// The scale is the smaller of the two axis ratios, so the limiting axis fills the viewport
/// exactly. All rounding is half away from zero. An empty image or viewport yields an empty
/// rectangle at the viewport center.
pub fn compute_layout(viewport: Size, image: Size) -> Rect {
    let (vw, vh) = (f64::from(viewport.width), f64::from(viewport.height));
    if image.is_empty() || viewport.is_empty() {
        return Rect::new(round_half_away(vw / 2.0), round_half_away(vh / 2.0), 0, 0);
    }

    let (iw, ih) = (f64::from(image.width), f64::from(image.height));
    let scale = (vw / iw).min(vh / ih);

    let width = round_half_away(scale * iw);
    let height = round_half_away(scale * ih);
    let x = round_half_away((vw - f64::from(width)) / 2.0);
    let y = round_half_away((vh - f64::from(height)) / 2.0);
    Rect::new(x, y, width, height)
}

/// Split a layout at `fraction` of its width.
///
/// `fraction` is clamped into `[0, 1]`; NaN is treated as `0`.
pub fn compute_split(layout: Rect, image_width: u32, fraction: f64) -> SplitWidths {
    let f = clamp_fraction(fraction);
    let image_width = i32::try_from(image_width).unwrap_or(i32::MAX);

    let left_src_width = round_half_away(f64::from(image_width) * f);
    let left_dest_width = round_half_away(f64::from(layout.width) * f);
    SplitWidths {
        left_dest_width,
        left_src_width,
        right_dest_width: layout.width - left_dest_width,
        right_src_width: image_width - left_src_width,
    }
}

/// Source and destination rectangles for both halves of the split view.
pub fn split_rects(layout: Rect, image: Size, fraction: f64) -> SplitRects {
    let split = compute_split(layout, image.width, fraction);
    let image_height = i32::try_from(image.height).unwrap_or(i32::MAX);

    SplitRects {
        first_src: Rect::new(0, 0, split.left_src_width, image_height),
        first_dst: Rect::new(layout.x, layout.y, split.left_dest_width, layout.height),
        second_src: Rect::new(split.left_src_width, 0, split.right_src_width, image_height),
        second_dst: Rect::new(
            layout.x.saturating_add(split.left_dest_width),
            layout.y,
            split.right_dest_width,
            layout.height,
        ),
    }
}

pub(crate) fn clamp_fraction(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/view/layout.rs"]
mod tests;
