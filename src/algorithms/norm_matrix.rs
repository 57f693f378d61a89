use crate::core::norm::Norm;
use crate::core::norm_matrix::NormMatrix;
use crate::core::observations::{validate_matrix, validate_parallel, validate_reference};
use crate::error::Result;

/// Distance from time step `reference` to every time step, once per series.
///
/// `series` are parallel observation matrices with the same number of rows
/// (their dimensionalities may differ). Column `s` of the result holds
/// `N::distance(series[s][reference], series[s][row])`; the reference row is
/// `+inf` in every column.
///
/// # Errors
///
/// `InvalidInput` for an empty series list, empty or zero-dimensional series,
/// or `reference` out of range; `ShapeMismatch` for ragged rows or series of
/// different lengths.
pub fn norm_matrix<N: Norm, R: AsRef<[f64]>>(
    series: &[&[R]],
    reference: usize,
) -> Result<NormMatrix> {
    let rows = validate_parallel(series, reference)?;
    let mut out = NormMatrix::new(rows, series.len(), reference);

    for t in (0..rows).filter(|&t| t != reference) {
        let row = out.row_mut(t);
        for (cell, observations) in row.iter_mut().zip(series) {
            *cell = N::distance(observations[reference].as_ref(), observations[t].as_ref());
        }
    }

    Ok(out)
}

/// [`norm_matrix`] for two parallel series, e.g. a source and a target.
///
/// The series may use different row types.
pub fn norm_matrix_pair<N: Norm, RA: AsRef<[f64]>, RB: AsRef<[f64]>>(
    series_a: &[RA],
    series_b: &[RB],
    reference: usize,
) -> Result<NormMatrix> {
    let a = row_slices(series_a);
    let b = row_slices(series_b);
    norm_matrix::<N, &[f64]>(&[a.as_slice(), b.as_slice()], reference)
}

/// [`norm_matrix`] for three parallel series.
pub fn norm_matrix_triple<N: Norm, RA: AsRef<[f64]>, RB: AsRef<[f64]>, RC: AsRef<[f64]>>(
    series_a: &[RA],
    series_b: &[RB],
    series_c: &[RC],
    reference: usize,
) -> Result<NormMatrix> {
    let a = row_slices(series_a);
    let b = row_slices(series_b);
    let c = row_slices(series_c);
    norm_matrix::<N, &[f64]>(&[a.as_slice(), b.as_slice(), c.as_slice()], reference)
}

fn row_slices<R: AsRef<[f64]>>(series: &[R]) -> Vec<&[f64]> {
    series.iter().map(AsRef::as_ref).collect()
}

/// Marginal distances from time step `reference`, one column per variable.
///
/// Column `v` holds `|series[reference][v] - series[row][v]|`. This is a
/// per-variable absolute difference, not a vector norm, and does not depend
/// on the configured norm mode. The reference row is `+inf` in every column.
///
/// # Errors
///
/// `InvalidInput` for an empty or zero-dimensional series or `reference` out
/// of range; `ShapeMismatch` for ragged rows.
pub fn norm_matrix_per_variable<R: AsRef<[f64]>>(
    series: &[R],
    reference: usize,
) -> Result<NormMatrix> {
    let shape = validate_matrix(series, "series")?;
    validate_reference(reference, shape.rows)?;

    let origin = series[reference].as_ref();
    let mut out = NormMatrix::new(shape.rows, shape.dims, reference);

    for (t, observation) in series.iter().enumerate() {
        if t == reference {
            continue;
        }
        for ((cell, a), b) in out.row_mut(t).iter_mut().zip(origin).zip(observation.as_ref()) {
            *cell = (a - b).abs();
        }
    }

    Ok(out)
}
