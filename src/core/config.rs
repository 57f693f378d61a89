use crate::core::norm_mode::NormMode;

/// Largest number of rows for which the cached (fast) minimum-distance
/// search is used by default. The cache holds one entry per unordered pair,
/// so memory grows as `n * (n - 1) / 2`.
pub const DEFAULT_MAX_ROWS_FOR_FAST: usize = 2000;

/// Which minimum-distance algorithm a computation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinDistanceAlgorithm {
    /// Pairwise scan with early abandonment, O(n) memory.
    Naive,
    /// Pair cache with symmetric reuse and resumable partial sums, O(n^2) memory.
    Fast,
}

impl MinDistanceAlgorithm {
    /// Fast at or below `max_rows_for_fast` rows, naive above.
    pub fn select(rows: usize, max_rows_for_fast: usize) -> Self {
        if rows <= max_rows_for_fast {
            Self::Fast
        } else {
            Self::Naive
        }
    }
}

/// Configuration for distance computations.
///
/// A `DistanceConfig` is a plain value: every computation observes exactly
/// the config of the engine it runs on, so two engines with different modes
/// can be used side by side from different threads.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceConfig {
    /// Norm used by `norm`, `joint_norm`, the minimum-distance engine and the
    /// multi-series norm matrices.
    pub norm: NormMode,
    /// Row count at or below which `min_distances` uses the fast algorithm.
    pub max_rows_for_fast: usize,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            norm: NormMode::default(),
            max_rows_for_fast: DEFAULT_MAX_ROWS_FOR_FAST,
        }
    }
}

impl DistanceConfig {
    pub fn new(norm: NormMode) -> Self {
        Self {
            norm,
            ..Self::default()
        }
    }

    /// Set the norm from a [`NormMode`] or a case-insensitive token.
    ///
    /// Unrecognised tokens select [`NormMode::Euclidean`].
    pub fn with_norm(mut self, norm: impl Into<NormMode>) -> Self {
        self.norm = norm.into();
        self
    }

    pub fn with_max_rows_for_fast(mut self, max_rows: usize) -> Self {
        self.max_rows_for_fast = max_rows;
        self
    }

    /// In-place variant of [`DistanceConfig::with_norm`].
    pub fn set_norm_mode(&mut self, norm: impl Into<NormMode>) {
        self.norm = norm.into();
    }

    pub fn norm_mode(&self) -> NormMode {
        self.norm
    }

    /// Canonical token of the active norm, e.g. `"MAX_NORM"`.
    pub fn norm_mode_name(&self) -> &'static str {
        self.norm.as_str()
    }

    /// Algorithm `min_distances` picks for a matrix with `rows` rows.
    pub fn algorithm_for(&self, rows: usize) -> MinDistanceAlgorithm {
        MinDistanceAlgorithm::select(rows, self.max_rows_for_fast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DistanceConfig::default();
        assert_eq!(config.norm_mode(), NormMode::Euclidean);
        assert_eq!(config.norm_mode_name(), "EUCLIDEAN");
        assert_eq!(config.max_rows_for_fast, 2000);
    }

    #[test]
    fn test_set_norm_mode_from_token() {
        let mut config = DistanceConfig::default();
        config.set_norm_mode("max_norm");
        assert_eq!(config.norm_mode_name(), "MAX_NORM");

        config.set_norm_mode(NormMode::EuclideanNormalised);
        assert_eq!(config.norm_mode_name(), "EUCLIDEAN_NORMALISED");

        config.set_norm_mode("chebyshev");
        assert_eq!(config.norm_mode_name(), "EUCLIDEAN");
    }

    #[test]
    fn test_algorithm_threshold_is_inclusive() {
        let config = DistanceConfig::default().with_max_rows_for_fast(10);
        assert_eq!(config.algorithm_for(9), MinDistanceAlgorithm::Fast);
        assert_eq!(config.algorithm_for(10), MinDistanceAlgorithm::Fast);
        assert_eq!(config.algorithm_for(11), MinDistanceAlgorithm::Naive);
    }

    #[test]
    fn test_builder_chain() {
        let config = DistanceConfig::new(NormMode::MaxNorm).with_max_rows_for_fast(0);
        assert_eq!(config.norm, NormMode::MaxNorm);
        assert_eq!(config.algorithm_for(2), MinDistanceAlgorithm::Naive);
    }
}
