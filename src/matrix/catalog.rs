use std::{collections::HashMap, str::FromStr, sync::LazyLock};

use crate::{
    foundation::error::{ViewerError, ViewerResult},
    matrix::color_matrix::{ColorMatrix, multiply},
};

/// Tag of a built-in catalog matrix.
///
/// The declaration order of [`BuiltinMatrix::ALL`] is the order exposed by
/// [`MatrixCatalog::list_all`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum BuiltinMatrix {
    /// No color transformation.
    Identity,
    /// Inverts RGB, keeps alpha.
    Negative,
    /// Luma-weighted gray using `{0.3, 0.6, 0.1}`.
    GrayScale,
    /// Classic sepia tone.
    Sepia,
    /// Gray luma routed into the red channel only.
    Red,
    /// Hue rotation by 180 degrees.
    HueShift180,
    /// Inverted gray.
    NegativeGrayScale,
    /// Inverted sepia.
    NegativeSepia,
    /// Inverted red-channel gray.
    NegativeRed,
    /// Luminance inversion that keeps hues.
    ///
    /// The theoretically correct form; pure colors overflow and come out desaturated after
    /// clamping.
    NegativeHueShift180,
    /// High saturation, good pure colors.
    NegativeHueShift180Variation1,
    /// Overall desaturated, yellows and blues suffer. Calm to look at.
    NegativeHueShift180Variation2,
    /// High saturation, yellows and blues suffer. Quite readable.
    NegativeHueShift180Variation3,
    /// Less readable, good colors (CMY slightly desaturated).
    NegativeHueShift180Variation4,
}

impl BuiltinMatrix {
    /// Every built-in, in catalog order.
    pub const ALL: [BuiltinMatrix; 14] = [
        BuiltinMatrix::Identity,
        BuiltinMatrix::Negative,
        BuiltinMatrix::GrayScale,
        BuiltinMatrix::Sepia,
        BuiltinMatrix::Red,
        BuiltinMatrix::HueShift180,
        BuiltinMatrix::NegativeGrayScale,
        BuiltinMatrix::NegativeSepia,
        BuiltinMatrix::NegativeRed,
        BuiltinMatrix::NegativeHueShift180,
        BuiltinMatrix::NegativeHueShift180Variation1,
        BuiltinMatrix::NegativeHueShift180Variation2,
        BuiltinMatrix::NegativeHueShift180Variation3,
        BuiltinMatrix::NegativeHueShift180Variation4,
    ];

    /// Stable display and lookup name.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinMatrix::Identity => "Identity",
            BuiltinMatrix::Negative => "Negative",
            BuiltinMatrix::GrayScale => "GrayScale",
            BuiltinMatrix::Sepia => "Sepia",
            BuiltinMatrix::Red => "Red",
            BuiltinMatrix::HueShift180 => "HueShift180",
            BuiltinMatrix::NegativeGrayScale => "NegativeGrayScale",
            BuiltinMatrix::NegativeSepia => "NegativeSepia",
            BuiltinMatrix::NegativeRed => "NegativeRed",
            BuiltinMatrix::NegativeHueShift180 => "NegativeHueShift180",
            BuiltinMatrix::NegativeHueShift180Variation1 => "NegativeHueShift180Variation1",
            BuiltinMatrix::NegativeHueShift180Variation2 => "NegativeHueShift180Variation2",
            BuiltinMatrix::NegativeHueShift180Variation3 => "NegativeHueShift180Variation3",
            BuiltinMatrix::NegativeHueShift180Variation4 => "NegativeHueShift180Variation4",
        }
    }

    /// The matrix registered under this tag in the global catalog.
    pub fn matrix(self) -> ColorMatrix {
        MatrixCatalog::global().entries[self as usize].matrix
    }
}

impl FromStr for BuiltinMatrix {
    type Err = ViewerError;

    fn from_str(s: &str) -> ViewerResult<Self> {
        BuiltinMatrix::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| ViewerError::not_found(format!("no built-in matrix named '{s}'")))
    }
}

/// One `(name, matrix)` row of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CatalogEntry {
    /// Unique entry name.
    pub name: &'static str,
    /// Typed tag of the entry.
    pub kind: BuiltinMatrix,
    /// The transform itself.
    pub matrix: ColorMatrix,
}

/// Read-only registry of the built-in matrices.
///
/// Built once on first access and never mutated afterwards, so shared references are handed
/// out freely across threads.
#[derive(Debug)]
pub struct MatrixCatalog {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<&'static str, usize>,
}

static CATALOG: LazyLock<MatrixCatalog> = LazyLock::new(MatrixCatalog::build);

impl MatrixCatalog {
    /// The process-wide catalog.
    pub fn global() -> &'static MatrixCatalog {
        &CATALOG
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> ViewerResult<ColorMatrix> {
        self.by_name
            .get(name)
            .map(|&idx| self.entries[idx].matrix)
            .ok_or_else(|| ViewerError::not_found(format!("no catalog matrix named '{name}'")))
    }

    /// All entries in catalog order. Stable across calls.
    pub fn list_all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entry names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[allow(clippy::excessive_precision)]
    fn build() -> Self {
        let identity = ColorMatrix::IDENTITY;
        let negative = ColorMatrix::new([
            [-1.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, -1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, -1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [1.0, 1.0, 1.0, 0.0, 1.0],
        ]);
        let gray_scale = ColorMatrix::new([
            [0.3, 0.3, 0.3, 0.0, 0.0],
            [0.6, 0.6, 0.6, 0.0, 0.0],
            [0.1, 0.1, 0.1, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ]);
        let red_isolate = ColorMatrix::new([
            [1.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ]);
        let sepia = ColorMatrix::new([
            [0.393, 0.349, 0.272, 0.0, 0.0],
            [0.769, 0.686, 0.534, 0.0, 0.0],
            [0.189, 0.168, 0.131, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ]);
        let hue_shift_180 = ColorMatrix::new([
            [-0.333_333_3, 0.666_666_7, 0.666_666_7, 0.0, 0.0],
            [0.666_666_7, -0.333_333_3, 0.666_666_7, 0.0, 0.0],
            [0.666_666_7, 0.666_666_7, -0.333_333_3, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ]);
        // simplest working form of a 180 degree hue shift on top of the inversion
        let neg_hue_v1 = ColorMatrix::new([
            [1.0, -1.0, -1.0, 0.0, 0.0],
            [-1.0, 1.0, -1.0, 0.0, 0.0],
            [-1.0, -1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [1.0, 1.0, 1.0, 0.0, 1.0],
        ]);
        let neg_hue_v2 = ColorMatrix::new([
            [0.39, -0.62, -0.62, 0.0, 0.0],
            [-1.21, -0.22, -1.22, 0.0, 0.0],
            [-0.16, -0.16, 0.84, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [1.0, 1.0, 1.0, 0.0, 1.0],
        ]);
        let neg_hue_v3 = ColorMatrix::new([
            [1.089_508, -0.932_632_7, -0.932_633_04, 0.0, 0.0],
            [-1.817_717_8, 0.168_307_4, -1.841_692_4, 0.0, 0.0],
            [-0.244_589_48, -0.247_815_64, 1.762_184_5, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [1.0, 1.0, 1.0, 0.0, 1.0],
        ]);
        let neg_hue_v4 = ColorMatrix::new([
            [0.50, -0.78, -0.78, 0.0, 0.0],
            [-0.56, 0.72, -0.56, 0.0, 0.0],
            [-0.94, -0.94, 0.34, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [1.0, 1.0, 1.0, 0.0, 1.0],
        ]);

        let red = multiply(&gray_scale, &red_isolate);
        let negative_gray_scale = multiply(&negative, &gray_scale);

        let matrix_for = |kind: BuiltinMatrix| match kind {
            BuiltinMatrix::Identity => identity,
            BuiltinMatrix::Negative => negative,
            BuiltinMatrix::GrayScale => gray_scale,
            BuiltinMatrix::Sepia => sepia,
            BuiltinMatrix::Red => red,
            BuiltinMatrix::HueShift180 => hue_shift_180,
            BuiltinMatrix::NegativeGrayScale => negative_gray_scale,
            BuiltinMatrix::NegativeSepia => multiply(&negative, &sepia),
            BuiltinMatrix::NegativeRed => multiply(&negative_gray_scale, &red),
            BuiltinMatrix::NegativeHueShift180 => multiply(&negative, &hue_shift_180),
            BuiltinMatrix::NegativeHueShift180Variation1 => neg_hue_v1,
            BuiltinMatrix::NegativeHueShift180Variation2 => neg_hue_v2,
            BuiltinMatrix::NegativeHueShift180Variation3 => neg_hue_v3,
            BuiltinMatrix::NegativeHueShift180Variation4 => neg_hue_v4,
        };

        let entries: Vec<CatalogEntry> = BuiltinMatrix::ALL
            .into_iter()
            .map(|kind| CatalogEntry {
                name: kind.name(),
                kind,
                matrix: matrix_for(kind),
            })
            .collect();
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.name, idx))
            .collect();

        tracing::debug!(entries = entries.len(), "built matrix catalog");
        Self { entries, by_name }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/catalog.rs"]
mod tests;
