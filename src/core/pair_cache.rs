use crate::error::{DistanceError, Result};

/// Triangular cache of partial accumulators for unordered row pairs.
///
/// Holds one cell per pair `{i, j}` with `i != j`, so `partial(i, j)` and
/// `partial(j, i)` address the same storage. Alongside each accumulator is
/// the number of dimensions folded into it so far, which lets a computation
/// abandoned early from one side be resumed exactly where it stopped.
///
/// Progress is stored as `u32`, so rows may have at most `u32::MAX`
/// dimensions. Used only for the duration of one fast minimum-distance call.
pub(crate) struct PairCache {
    partial: Vec<f64>,
    progress: Vec<u32>,
}

impl PairCache {
    /// Allocate a zeroed cache for `n` rows.
    ///
    /// Fails with `InvalidInput` if `n * (n - 1) / 2` cells cannot be
    /// allocated, instead of aborting the process.
    pub fn new(n: usize) -> Result<Self> {
        let cells = n
            .checked_mul(n.saturating_sub(1))
            .map(|c| c / 2)
            .ok_or_else(|| too_large(n))?;

        let mut partial = Vec::new();
        partial.try_reserve_exact(cells).map_err(|_| too_large(n))?;
        partial.resize(cells, 0.0);

        let mut progress = Vec::new();
        progress.try_reserve_exact(cells).map_err(|_| too_large(n))?;
        progress.resize(cells, 0);

        tracing::trace!(rows = n, cells = cells, "Allocated pair cache");

        Ok(Self { partial, progress })
    }

    /// Order-independent index of the pair `{i, j}`.
    #[inline(always)]
    fn key(i: usize, j: usize) -> usize {
        debug_assert_ne!(i, j, "a row is never paired with itself");
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        hi * (hi - 1) / 2 + lo
    }

    /// Current accumulator and progress for `{i, j}`.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> (f64, u32) {
        let k = Self::key(i, j);
        (self.partial[k], self.progress[k])
    }

    /// Mutable accumulator and progress for `{i, j}`.
    #[inline(always)]
    pub fn cell_mut(&mut self, i: usize, j: usize) -> (&mut f64, &mut u32) {
        let k = Self::key(i, j);
        (&mut self.partial[k], &mut self.progress[k])
    }

    /// Bytes held by the cells.
    #[cfg(test)]
    pub fn heap_bytes(&self) -> usize {
        self.partial.len() * std::mem::size_of::<f64>()
            + self.progress.len() * std::mem::size_of::<u32>()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.partial.len()
    }
}

fn too_large(n: usize) -> DistanceError {
    DistanceError::InvalidInput(format!(
        "pair cache for {n} observations does not fit in memory; use the naive algorithm"
    ))
}
