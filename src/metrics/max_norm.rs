use crate::core::norm::Norm;
use crate::core::norm_mode::NormMode;

/// Max norm (Chebyshev distance).
///
/// Accumulator: running maximum of `|a[i] - b[i]|`. The accumulator is
/// already the distance, so `finish` is the identity.
///
/// A NaN difference poisons the accumulator (it stays NaN), matching how
/// the Euclidean sum propagates non-finite input.
#[derive(Debug, Clone)]
pub struct MaxNorm;

impl Norm for MaxNorm {
    const MODE: NormMode = NormMode::MaxNorm;

    #[inline(always)]
    fn accumulate(partial: f64, diff: f64) -> f64 {
        let d = diff.abs();
        if d > partial || d.is_nan() {
            d
        } else {
            partial
        }
    }

    #[inline(always)]
    fn finish(partial: f64, _dims: usize) -> f64 {
        partial
    }
}

/// Maximum absolute component difference between two vectors.
///
/// ```
/// use mindist_rs::max_norm;
///
/// assert_eq!(max_norm(&[0.0, 0.0], &[1.0, -5.0]), 5.0);
/// ```
#[inline]
pub fn max_norm(a: &[f64], b: &[f64]) -> f64 {
    MaxNorm::distance(a, b)
}
