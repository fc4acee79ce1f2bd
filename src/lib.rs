//! colormatrix applies 5x5 color matrices to RGBA images and compares results side by side.
//!
//! The public surface is small:
//!
//! - Build or look up a [`ColorMatrix`] (see [`MatrixCatalog`] and [`BuiltinMatrix`])
//! - Compose matrices with [`multiply`] and edit them cell by cell with [`MatrixEditor`]
//! - Apply one to pixels with [`apply_pixel`] or to whole images with [`apply_to_image`]
//! - Show two images with a draggable divider using [`SplitView`] and a [`DrawSurface`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub(crate) mod apply;
pub(crate) mod assets;
pub(crate) mod foundation;
pub(crate) mod matrix;
pub(crate) mod render;
pub(crate) mod view;

pub use crate::foundation::core::{Rect, Size};
pub use crate::foundation::error::{ViewerError, ViewerResult};

pub use crate::matrix::catalog::{BuiltinMatrix, CatalogEntry, MatrixCatalog};
pub use crate::matrix::color_matrix::{ColorMatrix, DIM, multiply};
pub use crate::matrix::editor::{MatrixEditor, Step, SubscriptionId, parse_cell};

pub use crate::apply::batch::{ApplyThreading, apply_to_image, apply_to_image_with};
pub use crate::apply::pixel::{RgbaF32, apply_pixel, apply_rgba8};

pub use crate::assets::decode::{decode_image, encode_png, load_image, save_png};
pub use crate::assets::raster::{Image, PLACEHOLDER_SIZE};

pub use crate::render::cpu::CpuSurface;
pub use crate::render::surface::{DEFAULT_CLEAR_RGBA, DrawSurface, RenderSettings};

pub use crate::view::layout::{SplitRects, SplitWidths, compute_layout, compute_split, split_rects};
pub use crate::view::split_view::{DragState, SplitView};
