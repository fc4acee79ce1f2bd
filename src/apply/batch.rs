use rayon::prelude::*;

use crate::{
    apply::pixel::apply_rgba8_slice,
    assets::raster::Image,
    foundation::error::{ViewerError, ViewerResult},
    matrix::color_matrix::ColorMatrix,
};

/// Threading and chunking controls for whole-image application.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ApplyThreading {
    /// Split the image across rayon workers when `true`.
    pub parallel: bool,
    /// Rows handed to a worker at a time.
    pub rows_per_chunk: usize,
    /// Optional dedicated worker count; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for ApplyThreading {
    fn default() -> Self {
        Self {
            parallel: true,
            rows_per_chunk: 16,
            threads: None,
        }
    }
}

impl ApplyThreading {
    /// Single-threaded application.
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

/// Transform every pixel of `img`, returning a new image of the same size.
///
/// Runs on the global rayon pool. The source image is never modified.
pub fn apply_to_image(img: &Image, matrix: &ColorMatrix) -> Image {
    let mut out = vec![0u8; img.as_rgba8().len()];
    if let Some(chunk_bytes) = chunk_bytes(img, &ApplyThreading::default()) {
        apply_parallel(img.as_rgba8(), &mut out, matrix, chunk_bytes);
    }
    img.with_pixels(out)
}

/// Transform every pixel of `img` with explicit threading controls.
#[tracing::instrument(skip(img, matrix), fields(size = %img.size()))]
pub fn apply_to_image_with(
    img: &Image,
    matrix: &ColorMatrix,
    threading: &ApplyThreading,
) -> ViewerResult<Image> {
    if threading.threads == Some(0) {
        return Err(ViewerError::validation(
            "apply threading 'threads' must be >= 1 when set",
        ));
    }

    let src = img.as_rgba8();
    let mut out = vec![0u8; src.len()];
    let Some(chunk_bytes) = chunk_bytes(img, threading) else {
        return Ok(img.with_pixels(out));
    };

    if !threading.parallel {
        apply_rgba8_slice(src, &mut out, matrix);
        return Ok(img.with_pixels(out));
    }

    match threading.threads {
        None => apply_parallel(src, &mut out, matrix, chunk_bytes),
        Some(n) => {
            let pool = build_thread_pool(n)?;
            pool.install(|| apply_parallel(src, &mut out, matrix, chunk_bytes));
        }
    }
    Ok(img.with_pixels(out))
}

// `None` for images without pixels. Chunks never exceed the whole image.
fn chunk_bytes(img: &Image, threading: &ApplyThreading) -> Option<usize> {
    let row_bytes = (img.width() as usize) * 4;
    let rows = img.height() as usize;
    if row_bytes == 0 || rows == 0 {
        return None;
    }
    Some(row_bytes * threading.rows_per_chunk.clamp(1, rows))
}

fn apply_parallel(src: &[u8], dst: &mut [u8], matrix: &ColorMatrix, chunk_bytes: usize) {
    dst.par_chunks_mut(chunk_bytes)
        .zip(src.par_chunks(chunk_bytes))
        .for_each(|(d, s)| apply_rgba8_slice(s, d, matrix));
}

fn build_thread_pool(threads: usize) -> ViewerResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| ViewerError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/apply/batch.rs"]
mod tests;
