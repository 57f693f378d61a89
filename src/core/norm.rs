use crate::core::norm_mode::NormMode;

/// Trait for the norms used in minimum-distance search and norm matrices.
///
/// Designed for static polymorphism: algorithms are generic over `N: Norm`,
/// so the per-dimension fold in the inner loop is monomorphized and inlined.
///
/// A norm is expressed as a fold over component differences into a partial
/// accumulator, followed by a single `finish` step. `accumulate` must be
/// monotonically non-decreasing in the accumulator, and `finish` must be
/// monotone in the accumulator for a fixed dimensionality. Together these
/// let the search algorithms compare and prune in the accumulator domain
/// and only call `finish` once per output value.
pub trait Norm: Clone + Send + Sync {
    /// The mode token this norm answers to.
    const MODE: NormMode;

    /// Fold one component difference `diff = a[d] - b[d]` into `partial`.
    fn accumulate(partial: f64, diff: f64) -> f64;

    /// Convert a complete accumulator over `dims` components to a distance.
    fn finish(partial: f64, dims: usize) -> f64;

    /// Fold every component of `a` and `b` in index order.
    #[inline]
    fn partial(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");
        a.iter()
            .zip(b)
            .fold(0.0, |acc, (x, y)| Self::accumulate(acc, x - y))
    }

    /// Distance between `a` and `b` under this norm.
    #[inline]
    fn distance(a: &[f64], b: &[f64]) -> f64 {
        Self::finish(Self::partial(a, b), a.len())
    }
}

/// Continue folding `a` and `b` into `partial`, starting at dimension
/// `*progress`, while the accumulator is still strictly below `bound`.
///
/// On return either `*progress == a.len()` (the accumulator is complete) or
/// `*partial >= bound` (the pair can no longer beat `bound`). Accumulators
/// are monotone, so abandoning early never changes which pairs win.
#[inline]
pub(crate) fn accumulate_below<N: Norm>(
    a: &[f64],
    b: &[f64],
    partial: &mut f64,
    progress: &mut usize,
    bound: f64,
) {
    let dims = a.len();
    while *partial < bound && *progress < dims {
        let d = *progress;
        *partial = N::accumulate(*partial, a[d] - b[d]);
        *progress += 1;
    }
}
