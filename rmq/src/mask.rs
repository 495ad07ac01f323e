use std::ops::Range;

use crate::{debug_check_range, min_index, scan_min, sparse_table::Levels, Rmq};

/// O(1) query, O(n) words of space.
/// Taken from  https://codeforces.com/blog/entry/78931
pub struct MaskRmq<'a, T> {
    /// The input values.
    values: &'a [T],
    /// A sparse table on the minima of blocks of size W.
    sparse: Levels,
    /// For a position i, consider a[i..i+W].
    /// The mask at i has bit j set if a[i+j'] > a[i+j] for all j'<j.
    masks: Vec<B>,
}

type B = u64;
const W: usize = B::BITS as usize;

impl<'a, T: Ord> MaskRmq<'a, T> {
    /// Leftmost minimum of `values[pos..pos + len]`, for `1 <= len <= W`.
    #[inline]
    fn window_min(&self, pos: usize, len: usize) -> usize {
        let bitmask = B::MAX >> (W - len);
        let mask = self.masks[pos] & bitmask;
        pos + (W - 1 - mask.leading_zeros() as usize)
    }
}

impl<'a, T: Ord> Rmq<'a, T> for MaskRmq<'a, T> {
    fn new(values: &'a [T]) -> Self {
        let chunk_mins: Vec<_> = values
            .chunks(W)
            .enumerate()
            .map(|(i, block)| i * W + scan_min(block, 0..block.len()))
            .collect();
        let sparse = Levels::over(values, chunk_mins);

        let mut masks = vec![0; values.len()];
        let mut mask: B = 0;
        for (i, x) in values.iter().enumerate().rev() {
            mask <<= 1;
            while mask > 0 {
                // Clear bits of values not smaller than the current one.
                if values[i + mask.trailing_zeros() as usize] >= *x {
                    // Clear the lsb.
                    mask &= mask - 1;
                } else {
                    break;
                }
            }
            mask |= 1;
            masks[i] = mask;
        }

        log::trace!("mask rmq: n={}", values.len());
        Self {
            values,
            sparse,
            masks,
        }
    }

    fn query(&self, range: Range<usize>) -> usize {
        debug_check_range(&range, self.values.len());
        if range.len() <= W {
            return self.window_min(range.start, range.len());
        }
        // head
        let head = self.window_min(range.start, W);
        // tail
        let tail = self.window_min(range.end - W, W);

        let blocks = range.start.div_ceil(W)..range.end / W;
        let best = if blocks.is_empty() {
            head
        } else {
            min_index(self.values, head, self.sparse.query(self.values, blocks))
        };
        min_index(self.values, best, tail)
    }
}
