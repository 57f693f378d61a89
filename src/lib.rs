//! Nearest-neighbour distances and norm matrices for multivariate time series.
//!
//! Building blocks for neighbour-counting estimators: for every observation,
//! the distance to its nearest other observation, and for a reference
//! observation, its distance to every other observation in one or more
//! parallel spaces.
//!
//! - **Norms**: [`NormMode::Euclidean`], [`NormMode::EuclideanNormalised`],
//!   [`NormMode::MaxNorm`], plus the joint-space norm.
//! - **Minimum distances**: a naive scan and a cached search that reuses
//!   symmetric pairs and resumes abandoned partial sums; both prune early.
//! - **Norm matrices**: per-series and per-variable distance tables with the
//!   reference row set to `+inf`.

pub mod algorithms;
pub mod core;
pub mod error;
pub mod metrics;

pub use crate::core::config::{DistanceConfig, MinDistanceAlgorithm, DEFAULT_MAX_ROWS_FOR_FAST};
pub use crate::core::norm::Norm;
pub use crate::core::norm_matrix::NormMatrix;
pub use crate::core::norm_mode::NormMode;
pub use crate::error::{DistanceError, Result};
pub use crate::metrics::euclidean::{
    euclidean_norm, euclidean_normalised_norm, Euclidean, EuclideanNormalised,
};
pub use crate::metrics::max_norm::{max_norm, MaxNorm};

use crate::core::observations::validate_pair;

/// Run a generic `fn::<N: Norm, ..>` with `N` chosen by a [`NormMode`].
macro_rules! with_norm {
    ($mode:expr, $($seg:ident)::+, <$($ty:ty),*>, ($($arg:expr),* $(,)?)) => {
        match $mode {
            NormMode::Euclidean => $($seg)::+::<Euclidean, $($ty),*>($($arg),*),
            NormMode::EuclideanNormalised => {
                $($seg)::+::<EuclideanNormalised, $($ty),*>($($arg),*)
            }
            NormMode::MaxNorm => $($seg)::+::<MaxNorm, $($ty),*>($($arg),*),
        }
    };
}

/// High-level facade for distance computations under one configuration.
///
/// The engine holds no mutable state; the norm is fixed by its
/// [`DistanceConfig`] for every call.
///
/// # Examples
///
/// ```
/// use mindist_rs::{DistanceConfig, DistanceEngine, NormMode};
///
/// let obs = vec![vec![0.0, 0.0], vec![3.0, 4.0], vec![6.0, 8.0]];
///
/// let engine = DistanceEngine::default();
/// assert_eq!(engine.min_distances(&obs).unwrap(), vec![5.0, 5.0, 5.0]);
///
/// let engine = DistanceEngine::new(DistanceConfig::new(NormMode::MaxNorm));
/// assert_eq!(engine.min_distances(&obs).unwrap(), vec![4.0, 4.0, 4.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceEngine {
    config: DistanceConfig,
}

impl DistanceEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: DistanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DistanceConfig {
        &self.config
    }

    pub fn norm_mode(&self) -> NormMode {
        self.config.norm
    }

    /// Minimum distance from every row to any other row.
    ///
    /// Uses the cached algorithm for up to `config.max_rows_for_fast` rows and
    /// the naive scan above that.
    pub fn min_distances<R: AsRef<[f64]>>(&self, observations: &[R]) -> Result<Vec<f64>> {
        with_norm!(
            self.config.norm,
            algorithms::min_distance::min_distances,
            <R>,
            (observations, self.config.max_rows_for_fast)
        )
    }

    /// Minimum distances by the naive O(n) memory scan, regardless of size.
    pub fn min_distances_naive<R: AsRef<[f64]>>(&self, observations: &[R]) -> Result<Vec<f64>> {
        with_norm!(
            self.config.norm,
            algorithms::min_distance::min_distances_naive,
            <R>,
            (observations)
        )
    }

    /// Minimum distances by the cached O(n^2) memory search, regardless of size.
    pub fn min_distances_fast<R: AsRef<[f64]>>(&self, observations: &[R]) -> Result<Vec<f64>> {
        with_norm!(
            self.config.norm,
            algorithms::cached::min_distances_fast,
            <R>,
            (observations)
        )
    }

    /// Distance between two vectors under the configured norm.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for empty vectors, `ShapeMismatch` for unequal lengths.
    pub fn norm(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
        validate_pair(x1, x2, "norm operands")?;
        Ok(self.config.norm.distance(x1, x2))
    }

    /// Joint-space distance between `(x1, y1)` and `(x2, y2)`: the larger of
    /// the norms in the `x` and `y` spaces.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for empty vectors, `ShapeMismatch` if `x1`/`x2` or
    /// `y1`/`y2` differ in length.
    pub fn joint_norm(&self, x1: &[f64], y1: &[f64], x2: &[f64], y2: &[f64]) -> Result<f64> {
        validate_pair(x1, x2, "joint norm x operands")?;
        validate_pair(y1, y2, "joint norm y operands")?;
        let mode = self.config.norm;
        Ok(mode.distance(x1, x2).max(mode.distance(y1, y2)))
    }

    /// Distances from time step `reference` in two parallel series.
    pub fn norm_matrix<RA: AsRef<[f64]>, RB: AsRef<[f64]>>(
        &self,
        series_a: &[RA],
        series_b: &[RB],
        reference: usize,
    ) -> Result<NormMatrix> {
        with_norm!(
            self.config.norm,
            algorithms::norm_matrix::norm_matrix_pair,
            <RA, RB>,
            (series_a, series_b, reference)
        )
    }

    /// Distances from time step `reference` in three parallel series.
    pub fn norm_matrix3<RA: AsRef<[f64]>, RB: AsRef<[f64]>, RC: AsRef<[f64]>>(
        &self,
        series_a: &[RA],
        series_b: &[RB],
        series_c: &[RC],
        reference: usize,
    ) -> Result<NormMatrix> {
        with_norm!(
            self.config.norm,
            algorithms::norm_matrix::norm_matrix_triple,
            <RA, RB, RC>,
            (series_a, series_b, series_c, reference)
        )
    }

    /// Per-variable absolute differences from time step `reference`.
    ///
    /// Independent of the configured norm.
    pub fn norm_matrix_per_variable<R: AsRef<[f64]>>(
        &self,
        series: &[R],
        reference: usize,
    ) -> Result<NormMatrix> {
        algorithms::norm_matrix::norm_matrix_per_variable(series, reference)
    }
}
