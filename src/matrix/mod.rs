pub(crate) mod catalog;
pub(crate) mod color_matrix;
pub(crate) mod editor;
