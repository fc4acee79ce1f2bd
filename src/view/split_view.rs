use std::sync::LazyLock;

use crate::{
    assets::raster::{Image, PLACEHOLDER_SIZE},
    foundation::{
        core::{Rect, Size},
        error::{ViewerError, ViewerResult},
    },
    render::surface::{DrawSurface, RenderSettings},
    view::layout::{SplitRects, clamp_fraction, compute_layout, split_rects},
};

static PLACEHOLDER: LazyLock<Image> = LazyLock::new(|| Image::test_pattern(PLACEHOLDER_SIZE));

/// Pointer interaction state of the splitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No press started inside the view.
    #[default]
    Idle,
    /// A press started inside the view and has not been released yet.
    Dragging,
}

/// Side-by-side comparison of two same-size images with a movable vertical divider.
///
/// The first image is drawn left of the divider, the second one right of it. Both images are
/// held as shared handles; pixels are copied only when one side has to be synthesized from the
/// other.
#[derive(Clone, Debug)]
pub struct SplitView {
    splitter_fraction: f64,
    first: Image,
    second: Image,
    viewport: Size,
    layout: Rect,
    drag: DragState,
    settings: RenderSettings,
    needs_repaint: bool,
}

impl SplitView {
    /// A view over the placeholder test card with the divider centered.
    pub fn new(viewport: Size) -> Self {
        Self::with_settings(viewport, RenderSettings::default())
    }

    /// Like [`SplitView::new`] with explicit render settings.
    pub fn with_settings(viewport: Size, settings: RenderSettings) -> Self {
        let placeholder = PLACEHOLDER.clone();
        let layout = compute_layout(viewport, placeholder.size());
        Self {
            splitter_fraction: 0.5,
            first: placeholder.clone(),
            second: placeholder,
            viewport,
            layout,
            drag: DragState::Idle,
            settings,
            needs_repaint: true,
        }
    }

    /// Replace the compared images.
    ///
    /// | first | second | result |
    /// |---|---|---|
    /// | none | none | placeholder on both sides |
    /// | some | none | second is a pixel copy of first |
    /// | none | some | first is a pixel copy of second |
    /// | some | some | both kept; sizes must match or [`ViewerError::DimensionMismatch`] |
    ///
    /// On error the view is left unchanged.
    #[tracing::instrument(skip_all, fields(first = ?first.as_ref().map(Image::size), second = ?second.as_ref().map(Image::size)))]
    pub fn set_images(&mut self, first: Option<Image>, second: Option<Image>) -> ViewerResult<()> {
        let (first, second) = match (first, second) {
            (None, None) => (PLACEHOLDER.clone(), PLACEHOLDER.clone()),
            (Some(a), None) => {
                let copy = a.deep_copy();
                (a, copy)
            }
            (None, Some(b)) => (b.deep_copy(), b),
            (Some(a), Some(b)) => {
                if a.size() != b.size() {
                    return Err(ViewerError::dimension_mismatch(a.size(), b.size()));
                }
                (a, b)
            }
        };

        self.first = first;
        self.second = second;
        self.relayout();
        self.needs_repaint = true;
        Ok(())
    }

    /// Go back to the placeholder pair.
    pub fn load_default_images(&mut self) {
        self.first = PLACEHOLDER.clone();
        self.second = PLACEHOLDER.clone();
        self.relayout();
        self.needs_repaint = true;
    }

    /// Image drawn left of the divider.
    pub fn first(&self) -> &Image {
        &self.first
    }

    /// Image drawn right of the divider.
    pub fn second(&self) -> &Image {
        &self.second
    }

    /// Divider position as a fraction of the displayed image width, always in `[0, 1]`.
    pub fn splitter_fraction(&self) -> f64 {
        self.splitter_fraction
    }

    /// Move the divider. Values are clamped into `[0, 1]`; NaN is ignored.
    pub fn set_splitter_fraction(&mut self, fraction: f64) {
        if fraction.is_nan() {
            return;
        }
        let fraction = clamp_fraction(fraction);
        if fraction != self.splitter_fraction {
            self.splitter_fraction = fraction;
            self.needs_repaint = true;
        }
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Change the viewport and recompute the layout.
    pub fn resize(&mut self, viewport: Size) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.relayout();
        self.needs_repaint = true;
    }

    /// Where the images are drawn inside the viewport.
    pub fn layout(&self) -> Rect {
        self.layout
    }

    /// Source/destination rectangles for the current divider position.
    pub fn split_rects(&self) -> SplitRects {
        split_rects(self.layout, self.first.size(), self.splitter_fraction)
    }

    /// Current pointer interaction state.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Render settings in use.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Start dragging and jump the divider to `x` (viewport pixels).
    pub fn pointer_down(&mut self, x: f64) -> bool {
        self.drag = DragState::Dragging;
        tracing::debug!(x, "splitter drag started");
        self.pointer_move(x)
    }

    /// Follow the pointer while dragging. Returns whether the divider was updated.
    ///
    /// Ignored when idle or when the layout has no width.
    pub fn pointer_move(&mut self, x: f64) -> bool {
        if self.drag != DragState::Dragging || self.layout.width == 0 {
            return false;
        }
        let fraction = (x - f64::from(self.layout.x)) / f64::from(self.layout.width);
        if fraction.is_nan() {
            return false;
        }
        self.set_splitter_fraction(fraction);
        true
    }

    /// Stop dragging.
    pub fn pointer_up(&mut self) {
        if self.drag == DragState::Dragging {
            tracing::debug!(fraction = self.splitter_fraction, "splitter drag ended");
        }
        self.drag = DragState::Idle;
    }

    /// Return whether anything changed since the last call or render, and reset the flag.
    pub fn take_needs_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    /// Draw the comparison onto `surface`.
    ///
    /// The view adopts the surface size as its viewport, clears it, then draws the first
    /// image's left part and the second image's right part with a hard vertical seam.
    #[tracing::instrument(skip_all, fields(fraction = self.splitter_fraction))]
    pub fn render(&mut self, surface: &mut dyn DrawSurface) -> ViewerResult<()> {
        self.resize(surface.size());
        if let Some(rgba) = self.settings.clear_rgba {
            surface.clear(rgba);
        }

        let rects = self.split_rects();
        if !rects.first_dst.is_empty() {
            surface.draw_image(&self.first, rects.first_src, rects.first_dst)?;
        }
        if !rects.second_dst.is_empty() {
            surface.draw_image(&self.second, rects.second_src, rects.second_dst)?;
        }
        self.needs_repaint = false;
        Ok(())
    }

    fn relayout(&mut self) {
        self.layout = compute_layout(self.viewport, self.first.size());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/split_view.rs"]
mod tests;
