use std::ops::Range;

use crate::{debug_check_range, min_index, scan_min, Rmq};

/// O(√n) query, O(n) words of space.
///
/// Splits the input into blocks of `b = round(√n)` elements and stores the
/// position of each block's minimum. A query scans its partial end blocks
/// element by element and the blocks fully inside it by their summaries.
pub struct BlockSummary<'a, T> {
    values: &'a [T],
    block_size: usize,
    /// Position of the minimum of block `i`, i.e. of `[i*b, min((i+1)*b, n))`.
    summary: Vec<usize>,
}

impl<'a, T: Ord> Rmq<'a, T> for BlockSummary<'a, T> {
    fn new(values: &'a [T]) -> Self {
        let n = values.len();
        let block_size = ((n as f64).sqrt().round() as usize).max(1);

        let mut summary = Vec::with_capacity(n.div_ceil(block_size));
        let mut best = 0;
        for i in 0..n {
            if i % block_size == 0 {
                best = i;
            } else {
                best = min_index(values, best, i);
            }
            if i % block_size == block_size - 1 || i == n - 1 {
                summary.push(best);
            }
        }

        log::trace!("block summary: n={n} block_size={block_size} blocks={}", summary.len());
        Self {
            values,
            block_size,
            summary,
        }
    }

    fn query(&self, range: Range<usize>) -> usize {
        debug_check_range(&range, self.values.len());
        let b = self.block_size;
        let Range { start: l, end: r } = range;
        let (lb, rb) = (l / b, (r - 1) / b);

        // At most two blocks: a direct scan is O(b).
        if rb <= lb + 1 {
            return scan_min(self.values, l..r);
        }

        let head = scan_min(self.values, l..(lb + 1) * b);
        let middle = self.summary[lb + 1..rb]
            .iter()
            .fold(head, |best, &i| min_index(self.values, best, i));
        let tail = scan_min(self.values, rb * b..r);
        min_index(self.values, middle, tail)
    }
}
