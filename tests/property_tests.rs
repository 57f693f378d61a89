//! Property-based tests for norms, minimum distances and norm matrices.
//!
//! The central property is that the cached and naive minimum-distance
//! searches agree exactly for every norm.

use mindist_rs::{
    euclidean_norm, euclidean_normalised_norm, max_norm, DistanceConfig, DistanceEngine, NormMode,
};
use proptest::prelude::*;

fn engine(mode: NormMode) -> DistanceEngine {
    DistanceEngine::new(DistanceConfig::new(mode))
}

fn arb_mode() -> impl Strategy<Value = NormMode> {
    prop_oneof![
        Just(NormMode::Euclidean),
        Just(NormMode::EuclideanNormalised),
        Just(NormMode::MaxNorm),
    ]
}

fn arb_vec_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..16).prop_flat_map(|len| {
        (
            proptest::collection::vec(-100.0f64..100.0, len),
            proptest::collection::vec(-100.0f64..100.0, len),
        )
    })
}

/// Observation matrices with 2..40 rows and 1..6 dimensions. Values are drawn
/// from a small integer grid part of the time so exact ties and duplicate
/// rows get exercised.
fn arb_observations() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (2usize..40, 1usize..6).prop_flat_map(|(rows, dims)| {
        let value = prop_oneof![
            -50.0f64..50.0,
            (-3i32..3).prop_map(f64::from),
        ];
        proptest::collection::vec(proptest::collection::vec(value, dims), rows)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn norm_of_self_is_zero(v in proptest::collection::vec(-1e6f64..1e6, 1..32), mode in arb_mode()) {
        prop_assert_eq!(engine(mode).norm(&v, &v).unwrap(), 0.0);
    }

    #[test]
    fn norm_is_symmetric((a, b) in arb_vec_pair(), mode in arb_mode()) {
        let e = engine(mode);
        prop_assert_eq!(e.norm(&a, &b).unwrap(), e.norm(&b, &a).unwrap());
    }

    #[test]
    fn max_norm_never_exceeds_euclidean((a, b) in arb_vec_pair()) {
        prop_assert!(max_norm(&a, &b) <= euclidean_norm(&a, &b));
    }

    #[test]
    fn normalised_is_scaled_euclidean((a, b) in arb_vec_pair()) {
        let expected = euclidean_norm(&a, &b) / (a.len() as f64).sqrt();
        let actual = euclidean_normalised_norm(&a, &b);
        prop_assert!(
            (actual - expected).abs() <= 1e-12 * expected.max(1.0),
            "normalised {} vs scaled {}", actual, expected
        );
    }

    #[test]
    fn joint_norm_is_max_of_components(
        (x1, x2) in arb_vec_pair(),
        (y1, y2) in arb_vec_pair(),
        mode in arb_mode(),
    ) {
        let e = engine(mode);
        let joint = e.joint_norm(&x1, &y1, &x2, &y2).unwrap();
        let nx = e.norm(&x1, &x2).unwrap();
        let ny = e.norm(&y1, &y2).unwrap();
        prop_assert_eq!(joint, nx.max(ny));
    }

    #[test]
    fn fast_matches_naive(obs in arb_observations(), mode in arb_mode()) {
        let e = engine(mode);
        let fast = e.min_distances_fast(&obs).unwrap();
        let naive = e.min_distances_naive(&obs).unwrap();
        prop_assert_eq!(fast, naive);
    }

    #[test]
    fn min_distance_is_smallest_pairwise_norm(obs in arb_observations(), mode in arb_mode()) {
        let e = engine(mode);
        let d = e.min_distances(&obs).unwrap();
        for (t, row) in obs.iter().enumerate() {
            let expected = obs
                .iter()
                .enumerate()
                .filter(|(t2, _)| *t2 != t)
                .map(|(_, other)| mode.distance(row, other))
                .fold(f64::INFINITY, f64::min);
            prop_assert_eq!(d[t], expected, "row {}", t);
        }
    }

    #[test]
    fn dispatch_follows_threshold(obs in arb_observations(), mode in arb_mode()) {
        let rows = obs.len();
        let at = DistanceEngine::new(DistanceConfig::new(mode).with_max_rows_for_fast(rows));
        let below = DistanceEngine::new(DistanceConfig::new(mode).with_max_rows_for_fast(rows - 1));
        prop_assert_eq!(at.min_distances(&obs).unwrap(), at.min_distances_fast(&obs).unwrap());
        prop_assert_eq!(below.min_distances(&obs).unwrap(), below.min_distances_naive(&obs).unwrap());
    }

    #[test]
    fn norm_matrix_sentinel_row(
        obs in arb_observations(),
        reference in any::<prop::sample::Index>(),
        mode in arb_mode(),
    ) {
        let t = reference.index(obs.len());
        let e = engine(mode);
        let m = e.norm_matrix(&obs, &obs, t).unwrap();
        for (row, values) in m.iter_rows().enumerate() {
            for &v in values {
                if row == t {
                    prop_assert!(v.is_infinite() && v > 0.0);
                } else {
                    prop_assert!(v.is_finite() && v >= 0.0, "row {} value {}", row, v);
                }
            }
        }
        let m = e.norm_matrix_per_variable(&obs, t).unwrap();
        prop_assert_eq!(m.columns(), obs[0].len());
        prop_assert!(m.row(t).iter().all(|v| v.is_infinite()));
    }
}
