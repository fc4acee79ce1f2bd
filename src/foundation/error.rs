use crate::foundation::core::Size;

/// Convenience result type used across the crate.
pub type ViewerResult<T> = Result<T, ViewerError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ViewerError {
    /// Two explicitly supplied images do not share the same dimensions.
    #[error("dimension mismatch: first image is {first}, second image is {second}")]
    DimensionMismatch {
        /// Size of the first (left) image.
        first: Size,
        /// Size of the second (right) image.
        second: Size,
    },

    /// Lookup of an unknown catalog entry.
    #[error("not found: {0}")]
    NotFound(String),

    /// Text that could not be turned into matrix values.
    #[error("invalid matrix input: {0}")]
    InvalidMatrixInput(String),

    /// Invalid caller-provided arguments (rectangles, thread counts, buffers).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ViewerError {
    /// Build a [`ViewerError::DimensionMismatch`] value.
    pub fn dimension_mismatch(first: Size, second: Size) -> Self {
        Self::DimensionMismatch { first, second }
    }

    /// Build a [`ViewerError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`ViewerError::InvalidMatrixInput`] value.
    pub fn invalid_matrix_input(msg: impl Into<String>) -> Self {
        Self::InvalidMatrixInput(msg.into())
    }

    /// Build a [`ViewerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
