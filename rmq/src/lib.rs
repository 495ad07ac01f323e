//! Static Range Minimum Query structures.
//!
//! Every structure borrows a fixed slice, preprocesses it once, and then
//! answers queries for the position of the minimum in a half-open range
//! `[l, r)`. When the minimum occurs more than once, the leftmost position is
//! returned, so all structures agree exactly on every input.
//!
//! | structure        | build        | query       |
//! |------------------|--------------|-------------|
//! | [`FullTable`]    | O(n²)        | O(1)        |
//! | [`SparseTable`]  | O(n lg n)    | O(1)        |
//! | [`SegmentTree`]  | O(n)         | O(lg n)     |
//! | [`BlockSummary`] | O(n)         | O(√n)       |
//! | [`FischerHeun`]  | O(n)         | O(1)        |
//! | [`MaskRmq`]      | O(n)         | O(1)        |

mod block_summary;
mod entry;
mod fischer_heun;
mod full_table;
mod mask;
mod segment_tree;
mod sparse_table;

use std::ops::Range;

pub use block_summary::BlockSummary;
pub use entry::Entry;
pub use fischer_heun::FischerHeun;
pub use full_table::FullTable;
pub use mask::MaskRmq;
pub use segment_tree::SegmentTree;
pub use sparse_table::SparseTable;

/// Range Minimum Query.
pub trait Rmq<'a, T: Ord> {
    /// Preprocess `values`. The slice may be empty, in which case the
    /// structure must never be queried.
    fn new(values: &'a [T]) -> Self;

    /// Index of the (leftmost) minimum of `values[range]`.
    ///
    /// The range must be non-empty and in bounds. This is only checked in
    /// debug builds.
    fn query(&self, range: Range<usize>) -> usize;
}

/// Of two positions, the one holding the smaller value; `i` wins ties.
///
/// Callers pass the position further to the left as `i` to keep answers
/// leftmost.
#[inline]
fn min_index<T: Ord>(values: &[T], i: usize, j: usize) -> usize {
    if values[j] < values[i] {
        j
    } else {
        i
    }
}

/// Leftmost minimum of `values[range]` by a linear scan.
#[inline]
fn scan_min<T: Ord>(values: &[T], range: Range<usize>) -> usize {
    let start = range.start;
    range.fold(start, |best, i| min_index(values, best, i))
}

#[inline]
fn debug_check_range(range: &Range<usize>, n: usize) {
    debug_assert!(
        range.start < range.end && range.end <= n,
        "invalid query range {range:?} for {n} elements"
    );
}

#[cfg(test)]
mod test {
    use super::*;
    use rayon::prelude::*;

    /// Position of the first minimum, by brute force.
    pub(crate) fn naive(a: &[u32], range: Range<usize>) -> usize {
        let m = *a[range.clone()].iter().min().unwrap();
        range.start + a[range].iter().position(|&x| x == m).unwrap()
    }

    /// Random arrays of many sizes, half of them with lots of duplicates.
    pub(crate) fn inputs() -> Vec<Vec<u32>> {
        let mut inputs = vec![];
        for n in (0..40).chain((100..700).step_by(200)) {
            for modulus in [4, u32::MAX] {
                inputs.push((0..n).map(|_| rand::random::<u32>() % modulus).collect());
            }
        }
        inputs
    }

    /// Check every range of `a`.
    pub(crate) fn test_rmq<'a, R: Rmq<'a, u32>>(a: &'a [u32]) {
        let n = a.len();
        let rmq = R::new(a);
        for i in 0..n {
            for j in i + 1..=n {
                let test_ans = rmq.query(i..j);
                let real_ans = naive(a, i..j);
                assert_eq!(
                    test_ans,
                    real_ans,
                    "Failure for n={n} i={i} j={j} len={}.",
                    j - i,
                );
            }
        }
    }

    fn scenario<'a, R: Rmq<'a, Entry>>(a: &'a [Entry]) {
        assert_eq!(a.len(), 6);
        let rmq = R::new(a);
        assert_eq!(rmq.query(0..6), 3);
        assert_eq!(rmq.query(1..3), 1);
        assert_eq!(rmq.query(2..5), 3);
        assert_eq!(rmq.query(4..6), 5);
        for i in 0..a.len() {
            assert_eq!(rmq.query(i..i + 1), i);
        }
    }

    #[test]
    fn fixed_scenario() {
        let a = [5, 2, 8, 1, 9, 3].map(Entry::new);
        scenario::<FullTable<Entry>>(&a);
        scenario::<SparseTable<Entry>>(&a);
        scenario::<SegmentTree<Entry>>(&a);
        scenario::<BlockSummary<Entry>>(&a);
        scenario::<FischerHeun<Entry>>(&a);
        scenario::<MaskRmq<Entry>>(&a);
    }

    #[test]
    fn empty_input() {
        let a: [Entry; 0] = [];
        let _ = FullTable::new(&a);
        let _ = SparseTable::new(&a);
        let _ = SegmentTree::new(&a);
        let _ = BlockSummary::new(&a);
        let _ = FischerHeun::new(&a);
        let _ = MaskRmq::new(&a);
    }

    #[test]
    fn structures_agree() {
        for n in [1, 2, 3, 17, 64, 65, 130, 257] {
            let a = (0..n)
                .map(|_| Entry::new(rand::random::<i32>() % 16))
                .collect::<Vec<_>>();
            let full = FullTable::new(&a);
            let sparse = SparseTable::new(&a);
            let segment = SegmentTree::new(&a);
            let blocks = BlockSummary::new(&a);
            let fischer_heun = FischerHeun::new(&a);
            let mask = MaskRmq::new(&a);
            for i in 0..n {
                for j in i + 1..=n {
                    let expected = segment.query(i..j);
                    assert!((i..j).contains(&expected));
                    assert_eq!(full.query(i..j), expected, "full table on {i}..{j}");
                    assert_eq!(sparse.query(i..j), expected, "sparse table on {i}..{j}");
                    assert_eq!(blocks.query(i..j), expected, "block summary on {i}..{j}");
                    assert_eq!(fischer_heun.query(i..j), expected, "fischer-heun on {i}..{j}");
                    assert_eq!(mask.query(i..j), expected, "mask rmq on {i}..{j}");
                }
            }
        }
    }

    #[test]
    fn rebuild_is_stable() {
        let a = (0..300).map(|_| rand::random::<u32>() % 50).collect::<Vec<_>>();
        let first = BlockSummary::new(&a);
        let second = BlockSummary::new(&a);
        let other = SparseTable::new(&a);
        for _ in 0..1000 {
            let i = rand::random::<usize>() % a.len();
            let j = i + 1 + rand::random::<usize>() % (a.len() - i);
            assert_eq!(a[first.query(i..j)], a[second.query(i..j)]);
            assert_eq!(a[first.query(i..j)], a[other.query(i..j)]);
        }
    }

    #[test]
    fn concurrent_queries() {
        let a = (0..1000).map(|_| rand::random::<u32>()).collect::<Vec<_>>();
        let sparse = SparseTable::new(&a);
        let segment = SegmentTree::new(&a);
        let fischer_heun = FischerHeun::new(&a);
        (0..a.len()).into_par_iter().for_each(|i| {
            for j in (i + 1..=a.len()).step_by(53) {
                let expected = naive(&a, i..j);
                assert_eq!(sparse.query(i..j), expected);
                assert_eq!(segment.query(i..j), expected);
                assert_eq!(fischer_heun.query(i..j), expected);
            }
        });
    }
}
