use std::ops::Range;

use crate::{debug_check_range, min_index, Rmq};

/// O(1) query, O(n lg n) words of space.
pub struct SparseTable<'a, T> {
    values: &'a [T],
    levels: Levels,
}

impl<'a, T: Ord> Rmq<'a, T> for SparseTable<'a, T> {
    fn new(values: &'a [T]) -> Self {
        let levels = Levels::new(values);
        log::trace!(
            "sparse table: n={} levels={}",
            values.len(),
            levels.levels.len()
        );
        Self { values, levels }
    }

    /// Query the minimum of [l, r).
    /// 0-based, right exclusive.
    fn query(&self, range: Range<usize>) -> usize {
        debug_check_range(&range, self.values.len());
        self.levels.query(self.values, range)
    }
}

/// The tables of a sparse table, without the values they index.
///
/// Level 0 is a list of positions into some slice of values, and the table
/// answers which of `base[l..r]` holds the smallest value. Kept separate so
/// that structures can build a sparse table over e.g. their block minima.
/// Every query must pass the same values the levels were built from.
pub(crate) struct Levels {
    /// `levels[k][j]` is the minimum of `base[j..j + 2^k]`.
    levels: Vec<Vec<usize>>,
    /// `log_table[len]` is `floor(lg len)`, for `1 <= len <= base.len()`.
    log_table: Vec<u32>,
}

impl Levels {
    pub(crate) fn new<T: Ord>(values: &[T]) -> Self {
        Self::over(values, (0..values.len()).collect())
    }

    /// Level `k` combines the two halves `[j, j + 2^(k-1))` and
    /// `[j + 2^(k-1), j + 2^k)` of level `k - 1`.
    ///
    /// `base` must be increasing for ties to resolve to the leftmost position.
    pub(crate) fn over<T: Ord>(values: &[T], base: Vec<usize>) -> Self {
        let n = base.len();

        let mut log_table = vec![0; n + 1];
        for len in 2..=n {
            log_table[len] = log_table[len / 2] + 1;
        }

        let mut levels = vec![base];
        if n > 0 {
            for k in 1..=log_table[n] {
                let half = 1 << (k - 1);
                let prev = &levels[k as usize - 1];
                let level = (0..=n - (1 << k))
                    .map(|j| min_index(values, prev[j], prev[j + half]))
                    .collect();
                levels.push(level);
            }
        }

        Self { levels, log_table }
    }

    /// Combine the largest power-of-two window starting at `l` with the one
    /// ending at `r`. They overlap unless the length is a power of two, which
    /// does not matter for a minimum.
    #[inline]
    pub(crate) fn query<T: Ord>(&self, values: &[T], range: Range<usize>) -> usize {
        let Range { start: l, end: r } = range;
        let k = self.log_table[r - l];
        let level = &self.levels[k as usize];
        if k == 0 {
            return level[l];
        }
        min_index(values, level[l], level[r - (1 << k)])
    }
}
