use crate::algorithms::cached::min_distances_fast;
use crate::core::config::MinDistanceAlgorithm;
use crate::core::norm::{accumulate_below, Norm};
use crate::core::observations::validate_for_min_distance;
use crate::error::Result;

/// Minimum distance from every row to any other row, choosing the algorithm
/// by row count.
///
/// Uses [`min_distances_fast`] when `observations.len() <= max_rows_for_fast`,
/// otherwise [`min_distances_naive`]. Both return identical values; they
/// differ only in memory and time. See [`crate::DistanceEngine`] for
/// dispatch on a [`crate::NormMode`].
pub fn min_distances<N: Norm, R: AsRef<[f64]>>(
    observations: &[R],
    max_rows_for_fast: usize,
) -> Result<Vec<f64>> {
    let algorithm = MinDistanceAlgorithm::select(observations.len(), max_rows_for_fast);
    tracing::debug!(
        rows = observations.len(),
        max_rows_for_fast,
        norm = N::MODE.as_str(),
        algorithm = ?algorithm,
        "Computing minimum distances"
    );
    match algorithm {
        MinDistanceAlgorithm::Fast => min_distances_fast::<N, R>(observations),
        MinDistanceAlgorithm::Naive => min_distances_naive::<N, R>(observations),
    }
}

/// Minimum distance from every row to any other row by direct pairwise scan.
///
/// For each row `t`, every other row is folded dimension by dimension and
/// abandoned as soon as its partial accumulator reaches the best value found
/// so far for `t`. O(n^2 * d) worst case, O(n) memory.
///
/// # Errors
///
/// `InvalidInput` for fewer than 2 rows or zero-dimensional rows,
/// `ShapeMismatch` for ragged rows.
pub fn min_distances_naive<N: Norm, R: AsRef<[f64]>>(observations: &[R]) -> Result<Vec<f64>> {
    let shape = validate_for_min_distance(observations)?;
    let rows: Vec<&[f64]> = observations.iter().map(AsRef::as_ref).collect();

    let distances = rows
        .iter()
        .enumerate()
        .map(|(t, &x)| {
            let mut best = f64::INFINITY;
            for (t2, &y) in rows.iter().enumerate() {
                if t2 == t {
                    continue;
                }
                let mut partial = 0.0;
                let mut progress = 0;
                accumulate_below::<N>(x, y, &mut partial, &mut progress, best);
                if partial < best {
                    best = partial;
                }
            }
            N::finish(best, shape.dims)
        })
        .collect();

    Ok(distances)
}
