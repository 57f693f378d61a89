use crate::core::norm::Norm;
use crate::core::norm_mode::NormMode;

/// Euclidean (L2) norm.
///
/// Accumulator: running sum of squared component differences.
/// Distance: `sqrt(sum((a[i] - b[i])^2))`.
#[derive(Debug, Clone)]
pub struct Euclidean;

impl Norm for Euclidean {
    const MODE: NormMode = NormMode::Euclidean;

    #[inline(always)]
    fn accumulate(partial: f64, diff: f64) -> f64 {
        partial + diff * diff
    }

    #[inline(always)]
    fn finish(partial: f64, _dims: usize) -> f64 {
        partial.sqrt()
    }
}

/// Euclidean norm scaled by `1 / sqrt(dims)`.
///
/// Same accumulator as [`Euclidean`], so rankings within one dimensionality
/// are identical; only the final value is rescaled. Makes distances
/// comparable across spaces of different dimensionality.
#[derive(Debug, Clone)]
pub struct EuclideanNormalised;

impl Norm for EuclideanNormalised {
    const MODE: NormMode = NormMode::EuclideanNormalised;

    #[inline(always)]
    fn accumulate(partial: f64, diff: f64) -> f64 {
        Euclidean::accumulate(partial, diff)
    }

    #[inline(always)]
    fn finish(partial: f64, dims: usize) -> f64 {
        partial.sqrt() / (dims as f64).sqrt()
    }
}

/// Euclidean distance between two vectors of equal length.
///
/// ```
/// use mindist_rs::euclidean_norm;
///
/// let d = euclidean_norm(&[0.0, 0.0], &[3.0, 4.0]);
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn euclidean_norm(a: &[f64], b: &[f64]) -> f64 {
    Euclidean::distance(a, b)
}

/// Euclidean distance divided by `sqrt(a.len())`.
#[inline]
pub fn euclidean_normalised_norm(a: &[f64], b: &[f64]) -> f64 {
    EuclideanNormalised::distance(a, b)
}
