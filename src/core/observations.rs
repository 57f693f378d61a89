//! Shape validation shared by every public entry point.
//!
//! Checks run once, before any distance is computed, so the algorithms can
//! index rows and dimensions without re-checking.

use crate::error::{DistanceError, Result};

/// Validated dimensions of an observation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub dims: usize,
}

/// Check that `observations` is non-empty, every row is non-empty, and all
/// rows share the first row's length.
pub fn validate_matrix<R: AsRef<[f64]>>(observations: &[R], what: &str) -> Result<Shape> {
    let first = observations.first().ok_or_else(|| {
        DistanceError::InvalidInput(format!("{what} is empty"))
    })?;
    let dims = first.as_ref().len();
    if dims == 0 {
        return Err(DistanceError::InvalidInput(format!(
            "{what} has zero-dimensional observations"
        )));
    }
    for (t, row) in observations.iter().enumerate().skip(1) {
        let len = row.as_ref().len();
        if len != dims {
            return Err(DistanceError::shape(format!("{what} row {t}"), dims, len));
        }
    }
    Ok(Shape {
        rows: observations.len(),
        dims,
    })
}

/// [`validate_matrix`] plus the requirement that every row has at least one
/// other row to be compared with.
pub fn validate_for_min_distance<R: AsRef<[f64]>>(observations: &[R]) -> Result<Shape> {
    let shape = validate_matrix(observations, "observations")?;
    if shape.rows < 2 {
        return Err(DistanceError::InvalidInput(format!(
            "minimum distance needs at least 2 observations, got {}",
            shape.rows
        )));
    }
    Ok(shape)
}

/// Validate parallel series: each is a valid matrix, all have the same number
/// of rows, and `reference` indexes a row.
pub fn validate_parallel<R: AsRef<[f64]>>(series: &[&[R]], reference: usize) -> Result<usize> {
    let mut rows = None;
    for (s, observations) in series.iter().enumerate() {
        let shape = validate_matrix(observations, &format!("series {s}"))?;
        match rows {
            None => rows = Some(shape.rows),
            Some(expected) if expected != shape.rows => {
                return Err(DistanceError::shape(
                    format!("series {s} length"),
                    expected,
                    shape.rows,
                ));
            }
            Some(_) => {}
        }
    }
    let rows = rows.ok_or_else(|| DistanceError::InvalidInput("no series given".into()))?;
    validate_reference(reference, rows)?;
    Ok(rows)
}

pub fn validate_reference(reference: usize, rows: usize) -> Result<()> {
    if reference >= rows {
        return Err(DistanceError::InvalidInput(format!(
            "reference index {reference} out of range for {rows} observations"
        )));
    }
    Ok(())
}

/// Check a pair of vectors about to be compared by a norm.
pub fn validate_pair(a: &[f64], b: &[f64], what: &str) -> Result<()> {
    if a.is_empty() {
        return Err(DistanceError::InvalidInput(format!("{what} is empty")));
    }
    if a.len() != b.len() {
        return Err(DistanceError::shape(what, a.len(), b.len()));
    }
    Ok(())
}
