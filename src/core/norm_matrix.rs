use std::slice::ChunksExact;

/// Distances from one reference time step to every time step.
///
/// Row-major `rows × columns`. Each column is one space: a whole series for
/// the multi-series builders, or a single variable for the per-variable
/// builder. The reference row holds `+inf` in every column, so counting
/// rows "strictly closer than epsilon" never counts the reference itself.
#[derive(Debug, Clone, PartialEq)]
pub struct NormMatrix {
    values: Vec<f64>,
    columns: usize,
    reference: usize,
}

impl NormMatrix {
    /// Create a matrix of zeros with the reference row set to infinity.
    pub(crate) fn new(rows: usize, columns: usize, reference: usize) -> Self {
        debug_assert!(reference < rows);
        let mut values = vec![0.0; rows * columns];
        values[reference * columns..(reference + 1) * columns].fill(f64::INFINITY);
        Self {
            values,
            columns,
            reference,
        }
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [f64] {
        &mut self.values[row * self.columns..(row + 1) * self.columns]
    }

    /// Number of time steps.
    pub fn rows(&self) -> usize {
        self.values.len() / self.columns
    }

    /// Number of spaces (series or variables).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The time step distances were measured from.
    pub fn reference_index(&self) -> usize {
        self.reference
    }

    /// Distances of time step `row` in every space.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.columns..(row + 1) * self.columns]
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if column >= self.columns {
            return None;
        }
        self.values.get(row * self.columns + column).copied()
    }

    /// Distances in one space, in time order, or `None` if `column` is out
    /// of range.
    pub fn column(&self, column: usize) -> Option<impl Iterator<Item = f64> + '_> {
        if column >= self.columns {
            return None;
        }
        Some(self.values.iter().skip(column).step_by(self.columns).copied())
    }

    pub fn iter_rows(&self) -> ChunksExact<'_, f64> {
        self.values.chunks_exact(self.columns)
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.values
            .chunks_exact(self.columns)
            .map(<[f64]>::to_vec)
            .collect()
    }
}
