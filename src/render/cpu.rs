use crate::{
    assets::raster::Image,
    foundation::{
        core::{Rect, Size},
        error::{ViewerError, ViewerResult},
    },
    render::surface::DrawSurface,
};

/// In-memory RGBA8 surface with nearest-neighbour scaling.
///
/// Blits replace destination pixels (alpha included); nothing is blended.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl CpuSurface {
    /// Transparent surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: vec![0; size.area() * 4],
        }
    }

    /// Raw row-major RGBA8 bytes.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x as usize, y as usize);
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Read the surface back as an image.
    pub fn into_image(self) -> ViewerResult<Image> {
        Image::from_rgba8(self.width, self.height, self.data)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (y * (self.width as usize) + x) * 4
    }
}

impl DrawSurface for CpuSurface {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn clear(&mut self, rgba: [u8; 4]) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    fn draw_image(&mut self, image: &Image, src: Rect, dst: Rect) -> ViewerResult<()> {
        if !Rect::from(image.size()).contains_rect(src) {
            return Err(ViewerError::validation(format!(
                "source rect {src:?} exceeds image bounds {}",
                image.size()
            )));
        }
        if src.is_empty() || dst.is_empty() {
            return Ok(());
        }
        let Some(visible) = dst.intersect(Rect::from(self.size())) else {
            return Ok(());
        };

        let src_px = image.as_rgba8();
        let image_width = image.width() as usize;
        let (sw, sh) = (i128::from(src.width), i128::from(src.height));
        let (dw, dh) = (i128::from(dst.width), i128::from(dst.height));

        for y in visible.y..visible.bottom() {
            // sample at the destination pixel center
            let dy = i128::from(y) - i128::from(dst.y);
            let sy = (((2 * dy + 1) * sh) / (2 * dh)).min(sh - 1);
            let row = (i128::from(src.y) + sy) as usize;
            for x in visible.x..visible.right() {
                let dx = i128::from(x) - i128::from(dst.x);
                let sx = (((2 * dx + 1) * sw) / (2 * dw)).min(sw - 1);
                let col = (i128::from(src.x) + sx) as usize;
                let s = (row * image_width + col) * 4;
                let d = self.index(x as usize, y as usize);
                self.data[d..d + 4].copy_from_slice(&src_px[s..s + 4]);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
