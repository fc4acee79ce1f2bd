use crate::{
    foundation::{
        error::{ViewerError, ViewerResult},
        math::round_significant,
    },
    matrix::color_matrix::{ColorMatrix, DIM, multiply},
};

/// Handle returned by [`MatrixEditor::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Increment applied by [`MatrixEditor::nudge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Step {
    /// One whole unit per notch.
    Coarse,
    /// A tenth per notch.
    Fine,
}

impl Step {
    /// Magnitude of one notch.
    pub fn amount(self) -> f64 {
        match self {
            Step::Coarse => 1.0,
            Step::Fine => 0.1,
        }
    }
}

type Observer = Box<dyn FnMut(&ColorMatrix)>;

/// Single-writer owner of the live, user-edited matrix.
///
/// Every mutation goes through `&mut self`; observers registered with
/// [`MatrixEditor::subscribe`] are called after a mutation that actually changed a value.
pub struct MatrixEditor {
    matrix: ColorMatrix,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Default for MatrixEditor {
    fn default() -> Self {
        Self::new(ColorMatrix::IDENTITY)
    }
}

impl std::fmt::Debug for MatrixEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixEditor")
            .field("matrix", &self.matrix)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl MatrixEditor {
    /// Start editing from `initial`.
    pub fn new(initial: ColorMatrix) -> Self {
        Self {
            matrix: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    pub fn matrix(&self) -> &ColorMatrix {
        &self.matrix
    }

    /// Register a change observer.
    pub fn subscribe(&mut self, observer: impl FnMut(&ColorMatrix) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` when `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Overwrite one cell. Returns whether the value changed.
    ///
    /// Non-finite values are rejected with [`ViewerError::InvalidMatrixInput`].
    pub fn set_cell(&mut self, row: usize, col: usize, value: f32) -> ViewerResult<bool> {
        check_cell(row, col)?;
        if !value.is_finite() {
            return Err(ViewerError::invalid_matrix_input(format!(
                "cell ({row}, {col}) must be finite, got {value}"
            )));
        }
        if self.matrix.get(row, col) == value {
            return Ok(false);
        }
        self.matrix.set(row, col, value);
        self.notify();
        Ok(true)
    }

    /// Parse `text` and store it in one cell. Returns whether the value changed.
    pub fn set_cell_text(&mut self, row: usize, col: usize, text: &str) -> ViewerResult<bool> {
        let value = parse_cell(text)?;
        self.set_cell(row, col, value)
    }

    /// Replace the whole matrix. Returns whether any value changed.
    pub fn replace(&mut self, matrix: ColorMatrix) -> bool {
        if self.matrix == matrix {
            return false;
        }
        self.matrix = matrix;
        self.notify();
        true
    }

    /// Go back to the identity matrix.
    pub fn reset(&mut self) -> bool {
        self.replace(ColorMatrix::IDENTITY)
    }

    /// Move one cell by `notches` steps (negative moves down).
    ///
    /// The result is rounded to 10 significant figures so repeated fine steps do not
    /// accumulate binary noise.
    pub fn nudge(&mut self, row: usize, col: usize, notches: i32, step: Step) -> ViewerResult<f32> {
        check_cell(row, col)?;
        let current = f64::from(self.matrix.get(row, col));
        let next = round_significant(current + f64::from(notches) * step.amount(), 10) as f32;
        self.set_cell(row, col, next)?;
        Ok(next)
    }

    /// The transform to apply: `base` first, then the edited matrix.
    pub fn effective(&self, base: &ColorMatrix) -> ColorMatrix {
        multiply(base, &self.matrix)
    }

    fn notify(&mut self) {
        tracing::debug!(observers = self.observers.len(), "color matrix changed");
        let matrix = self.matrix;
        for (_, observer) in &mut self.observers {
            observer(&matrix);
        }
    }
}

fn check_cell(row: usize, col: usize) -> ViewerResult<()> {
    if row >= DIM || col >= DIM {
        return Err(ViewerError::validation(format!(
            "cell ({row}, {col}) is outside the {DIM}x{DIM} matrix"
        )));
    }
    Ok(())
}

/// Parse a single cell value.
///
/// Accepts `,` as the decimal separator and surrounding whitespace; rejects empty text and
/// non-finite values.
pub fn parse_cell(text: &str) -> ViewerResult<f32> {
    let normalized = text.trim().replace(',', ".");
    normalized
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ViewerError::invalid_matrix_input(format!("'{text}' is not a number")))
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/editor.rs"]
mod tests;
