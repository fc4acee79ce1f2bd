use crate::{
    assets::raster::Image,
    foundation::{
        core::{Rect, Size},
        error::ViewerResult,
    },
};

/// Background gray used when no explicit clear color is configured.
pub const DEFAULT_CLEAR_RGBA: [u8; 4] = [160, 160, 160, 255];

/// Drawing target the split view renders into.
///
/// The split view only issues "clear" and "blit rectangle from image to rectangle" calls; how
/// pixels reach the screen is up to the implementation.
pub trait DrawSurface {
    /// Surface dimensions; the split view lays itself out inside them.
    fn size(&self) -> Size;

    /// Fill the whole surface with one straight-alpha RGBA8 color.
    fn clear(&mut self, rgba: [u8; 4]);

    /// Copy `src` (image pixel space) into `dst` (surface pixel space), scaling as needed.
    fn draw_image(&mut self, image: &Image, src: Rect, dst: Rect) -> ViewerResult<()>;
}

/// Backend-agnostic render settings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// If set, the surface is cleared to this RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_rgba: Some(DEFAULT_CLEAR_RGBA),
        }
    }
}
