use std::{fmt, ops::Mul, str::FromStr};

use crate::foundation::error::{ViewerError, ViewerResult};

/// Side length of a color matrix: four color channels plus the homogeneous bias term.
pub const DIM: usize = 5;

/// A 5x5 affine transform over the augmented color vector `(R, G, B, A, 1)`.
///
/// Rows are stored row-major and the matrix acts on row vectors:
/// `[R' G' B' A' 1] = [R G B A 1] · M`. Column `j` therefore holds the weights feeding output
/// channel `j`, and row 4 is the bias added to every output channel.
///
/// The last column is not forced to `[0, 0, 0, 0, 1]`; several catalog entries rely on that.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ColorMatrix([[f32; DIM]; DIM]);

impl ColorMatrix {
    /// No color transformation.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]);

    /// All zeros.
    pub const ZERO: Self = Self([[0.0; DIM]; DIM]);

    /// Build a matrix from its rows.
    pub const fn new(rows: [[f32; DIM]; DIM]) -> Self {
        Self(rows)
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[[f32; DIM]; DIM] {
        &self.0
    }

    /// Value at `(row, col)`. Panics when either index is `>= 5`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[row][col]
    }

    /// Overwrite the value at `(row, col)`. Panics when either index is `>= 5`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.0[row][col] = value;
    }

    /// Column `col` as an array, i.e. the weights of output channel `col`.
    pub fn column(&self, col: usize) -> [f32; DIM] {
        std::array::from_fn(|k| self.0[k][col])
    }

    /// Compose two transforms: applying the result equals applying `self`, then `next`.
    pub fn then(&self, next: &ColorMatrix) -> ColorMatrix {
        multiply(self, next)
    }

    /// Element-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &ColorMatrix, eps: f32) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Iterate the 25 values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.iter().flatten().copied()
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[[f32; DIM]; DIM]> for ColorMatrix {
    fn from(rows: [[f32; DIM]; DIM]) -> Self {
        Self(rows)
    }
}

/// Standard 5x5 product, `C[i][j] = Σ_k a[i][k] * b[k][j]`.
///
/// Inputs are never mutated and no rounding or clamping happens here.
pub fn multiply(a: &ColorMatrix, b: &ColorMatrix) -> ColorMatrix {
    let mut out = [[0.0f32; DIM]; DIM];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..DIM).map(|k| a.0[i][k] * b.0[k][j]).sum();
        }
    }
    ColorMatrix(out)
}

impl Mul for ColorMatrix {
    type Output = ColorMatrix;

    fn mul(self, rhs: ColorMatrix) -> ColorMatrix {
        multiply(&self, &rhs)
    }
}

impl Mul<&ColorMatrix> for &ColorMatrix {
    type Output = ColorMatrix;

    fn mul(self, rhs: &ColorMatrix) -> ColorMatrix {
        multiply(self, rhs)
    }
}

impl fmt::Display for ColorMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for ColorMatrix {
    type Err = ViewerError;

    /// Parse 25 numbers separated by whitespace or `;`, row-major.
    fn from_str(s: &str) -> ViewerResult<Self> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ';')
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<f32>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        ViewerError::invalid_matrix_input(format!("'{tok}' is not a finite number"))
                    })
            })
            .collect::<ViewerResult<Vec<f32>>>()?;

        if values.len() != DIM * DIM {
            return Err(ViewerError::invalid_matrix_input(format!(
                "expected {} values, got {}",
                DIM * DIM,
                values.len()
            )));
        }

        let mut rows = [[0.0f32; DIM]; DIM];
        for (idx, v) in values.into_iter().enumerate() {
            rows[idx / DIM][idx % DIM] = v;
        }
        Ok(Self(rows))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/color_matrix.rs"]
mod tests;
