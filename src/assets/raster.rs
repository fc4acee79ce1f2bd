use std::sync::Arc;

use crate::foundation::{
    core::Size,
    error::{ViewerError, ViewerResult},
};

/// Dimensions of [`Image::test_pattern`] as used by the split view placeholder.
pub const PLACEHOLDER_SIZE: Size = Size::new(320, 240);

/// Immutable straight-alpha RGBA8 raster.
///
/// Pixel storage is reference counted: `clone` shares it, [`Image::deep_copy`] duplicates it.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    rgba8: Arc<Vec<u8>>,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba8_ptr", &Arc::as_ptr(&self.rgba8))
            .finish()
    }
}

impl Image {
    /// Wrap tightly packed row-major RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> ViewerResult<Self> {
        let expected = byte_len(width, height)?;
        if rgba8.len() != expected {
            return Err(ViewerError::validation(format!(
                "rgba8 buffer for {width}x{height} must hold {expected} bytes, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// An image where every pixel is `rgba`.
    pub fn filled(size: Size, rgba: [u8; 4]) -> ViewerResult<Self> {
        let len = byte_len(size.width, size.height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..size.area() {
            data.extend_from_slice(&rgba);
        }
        Self::from_rgba8(size.width, size.height, data)
    }

    /// Procedural test card: color bars, a gray ramp and a translucent checker strip.
    pub fn test_pattern(size: Size) -> Self {
        const BARS: [[u8; 3]; 8] = [
            [255, 255, 255],
            [255, 255, 0],
            [0, 255, 255],
            [0, 255, 0],
            [255, 0, 255],
            [255, 0, 0],
            [0, 0, 255],
            [0, 0, 0],
        ];

        let (w, h) = (size.width as usize, size.height as usize);
        let bars_end = h * 2 / 3;
        let ramp_end = h * 5 / 6;
        let mut data = Vec::with_capacity(w * h * 4);
        for y in 0..h {
            for x in 0..w {
                let px = if y < bars_end {
                    let [r, g, b] = BARS[x * BARS.len() / w.max(1)];
                    [r, g, b, 255]
                } else if y < ramp_end {
                    let v = (x * 255 / w.saturating_sub(1).max(1)) as u8;
                    [v, v, v, 255]
                } else if ((x / 16) + (y / 16)) % 2 == 0 {
                    [255, 255, 255, 255]
                } else {
                    [0, 0, 0, 128]
                };
                data.extend_from_slice(&px);
            }
        }

        Self {
            width: size.width,
            height: size.height,
            rgba8: Arc::new(data),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Raw row-major RGBA8 bytes.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.rgba8
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy with its own pixel storage.
    pub fn deep_copy(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            rgba8: Arc::new(self.rgba8.as_ref().clone()),
        }
    }

    /// Same dimensions, new pixel storage. `rgba8` must have the same length as ours.
    pub(crate) fn with_pixels(&self, rgba8: Vec<u8>) -> Self {
        debug_assert_eq!(rgba8.len(), self.rgba8.len());
        Self {
            width: self.width,
            height: self.height,
            rgba8: Arc::new(rgba8),
        }
    }

    /// Return `true` when both handles point at the same pixel storage.
    pub fn shares_pixels(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.rgba8, &other.rgba8)
    }
}

fn byte_len(width: u32, height: u32) -> ViewerResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ViewerError::validation("image buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
