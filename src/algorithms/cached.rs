use crate::core::norm::{accumulate_below, Norm};
use crate::core::observations::validate_for_min_distance;
use crate::core::pair_cache::PairCache;
use crate::error::{DistanceError, Result};

/// Minimum distance from every row to any other row, reusing work across
/// symmetric pairs.
///
/// Rows are visited in increasing order. For row `t1`, pairs with earlier
/// rows were already touched while those rows were processed, and are in
/// one of two states in the [`PairCache`]:
///
/// 1. **Finished**: the full accumulator is known and is taken as-is.
/// 2. **Abandoned**: pruning stopped it at some dimension because it could
///    not beat the earlier row's minimum. It is resumed from its progress
///    counter, now pruned against `t1`'s running minimum instead.
///
/// Finished pairs are read first so the tightest known bound is in place
/// before any resumption. Pairs with later rows are then computed from
/// scratch, with the same pruning, and stored for those rows to reuse.
///
/// Results are identical to [`crate::algorithms::min_distance::min_distances_naive`]:
/// both fold dimensions in index order with the same accumulator, so the
/// winning pair's value is bit-for-bit the same.
///
/// Memory is `n * (n - 1) / 2` cells, allocated for this call only.
///
/// # Errors
///
/// `InvalidInput` for fewer than 2 rows, zero-dimensional rows, more than
/// `u32::MAX` dimensions, or a cache that cannot be allocated;
/// `ShapeMismatch` for ragged rows.
pub fn min_distances_fast<N: Norm, R: AsRef<[f64]>>(observations: &[R]) -> Result<Vec<f64>> {
    let shape = validate_for_min_distance(observations)?;
    let rows: Vec<&[f64]> = observations.iter().map(AsRef::as_ref).collect();
    let n = shape.rows;
    let dims = shape.dims;
    let complete = u32::try_from(dims).map_err(|_| {
        DistanceError::InvalidInput(format!(
            "{dims} dimensions exceed the pair cache limit; use the naive algorithm"
        ))
    })?;

    let mut cache = PairCache::new(n)?;
    let mut distances = Vec::with_capacity(n);

    for t1 in 0..n {
        let x = rows[t1];
        let mut best = f64::INFINITY;

        for t2 in 0..t1 {
            let (partial, progress) = cache.get(t2, t1);
            if progress == complete && partial < best {
                best = partial;
            }
        }

        for t2 in 0..t1 {
            let (partial, progress) = cache.cell_mut(t2, t1);
            if *progress == complete {
                continue;
            }
            resume::<N>(x, rows[t2], partial, progress, best);
            if *partial < best {
                best = *partial;
            }
        }

        for t2 in (t1 + 1)..n {
            let (partial, progress) = cache.cell_mut(t1, t2);
            resume::<N>(x, rows[t2], partial, progress, best);
            if *partial < best {
                best = *partial;
            }
        }

        distances.push(N::finish(best, dims));
    }

    Ok(distances)
}

/// [`accumulate_below`] on a cache cell. `progress` never exceeds the row
/// length, which was checked to fit in `u32`.
#[inline(always)]
fn resume<N: Norm>(a: &[f64], b: &[f64], partial: &mut f64, progress: &mut u32, bound: f64) {
    let mut done = *progress as usize;
    accumulate_below::<N>(a, b, partial, &mut done, bound);
    *progress = done as u32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::min_distance::min_distances_naive;
    use crate::metrics::euclidean::{Euclidean, EuclideanNormalised};
    use crate::metrics::max_norm::MaxNorm;

    fn wave(n: usize, dims: usize) -> Vec<Vec<f64>> {
        (0..n)
            .map(|i| {
                (0..dims)
                    .map(|d| ((i * (d + 1)) as f64 * 0.37).sin() * (d as f64 + 1.0))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_fast_collinear_euclidean() {
        let obs = [[0.0, 0.0], [3.0, 4.0], [6.0, 8.0]];
        let d = min_distances_fast::<Euclidean, _>(&obs).unwrap();
        assert_eq!(d, vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_fast_max_norm_pair() {
        let obs = [[0.0, 0.0], [1.0, 5.0]];
        let d = min_distances_fast::<MaxNorm, _>(&obs).unwrap();
        assert_eq!(d, vec![5.0, 5.0]);
    }

    #[test]
    fn test_fast_matches_naive_all_norms() {
        for (n, dims) in [(2, 1), (3, 2), (17, 3), (64, 5), (101, 8)] {
            let obs = wave(n, dims);
            assert_eq!(
                min_distances_fast::<Euclidean, _>(&obs).unwrap(),
                min_distances_naive::<Euclidean, _>(&obs).unwrap(),
                "Euclidean n={n} dims={dims}"
            );
            assert_eq!(
                min_distances_fast::<EuclideanNormalised, _>(&obs).unwrap(),
                min_distances_naive::<EuclideanNormalised, _>(&obs).unwrap(),
                "EuclideanNormalised n={n} dims={dims}"
            );
            assert_eq!(
                min_distances_fast::<MaxNorm, _>(&obs).unwrap(),
                min_distances_naive::<MaxNorm, _>(&obs).unwrap(),
                "MaxNorm n={n} dims={dims}"
            );
        }
    }

    #[test]
    fn test_fast_resumes_abandoned_pairs() {
        // Rows 0 and 1 both abandon their pair with row 2 after one
        // dimension; row 2 has to resume both before it can finish.
        let obs = [
            [0.0, 0.0, 0.0],
            [0.5, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [9.0, 9.0, 9.0],
        ];
        let d = min_distances_fast::<Euclidean, _>(&obs).unwrap();
        assert_eq!(d, vec![0.5, 0.5, 0.5, 226.0_f64.sqrt()]);
    }

    #[test]
    fn test_non_finite_rows_come_out_infinite() {
        // A NaN accumulator never compares below the running minimum, and an
        // infinite one never beats a finite pair, so neither row finds a
        // neighbour and neither disturbs the finite rows.
        let obs = [
            [0.0, 0.0],
            [f64::NAN, 1.0],
            [1.0, 1.0],
            [f64::INFINITY, 0.0],
        ];

        fn check<N: Norm>(obs: &[[f64; 2]], finite: f64) {
            let fast = min_distances_fast::<N, _>(obs).unwrap();
            let naive = min_distances_naive::<N, _>(obs).unwrap();
            let name = N::MODE;
            assert_eq!(fast.len(), 4);
            for (i, (f, n)) in fast.iter().zip(&naive).enumerate() {
                assert_eq!(f.to_bits(), n.to_bits(), "{name} row {i}: fast {f} naive {n}");
            }
            assert_eq!(fast[1], f64::INFINITY, "{name}");
            assert_eq!(fast[3], f64::INFINITY, "{name}");
            assert!((fast[0] - finite).abs() < 1e-12, "{name}: got {}", fast[0]);
            assert!((fast[2] - finite).abs() < 1e-12, "{name}: got {}", fast[2]);
        }

        check::<Euclidean>(&obs, 2.0_f64.sqrt());
        check::<EuclideanNormalised>(&obs, 1.0);
        check::<MaxNorm>(&obs, 1.0);
    }

    #[test]
    fn test_fast_identical_rows() {
        let obs = vec![vec![2.0, 2.0]; 5];
        let d = min_distances_fast::<Euclidean, _>(&obs).unwrap();
        assert!(d.iter().all(|&v| v == 0.0), "got {d:?}");
    }

    #[test]
    fn test_fast_empty_is_invalid() {
        let obs: Vec<Vec<f64>> = Vec::new();
        assert!(min_distances_fast::<Euclidean, _>(&obs)
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_fast_ragged_is_shape_mismatch() {
        let obs = vec![vec![1.0, 2.0], vec![1.0]];
        assert!(min_distances_fast::<Euclidean, _>(&obs)
            .unwrap_err()
            .is_shape_mismatch());
    }
}
