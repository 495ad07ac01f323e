use std::ops::Range;

use crate::{debug_check_range, min_index, Rmq};

/// O(1) query, O(n²) words of space.
///
/// Stores the answer to every query. Row `l` holds the answers for `[l, l+1)`,
/// `[l, l+2)`, ..., `[l, n)`, so the rows form a triangle of `n(n+1)/2`
/// positions.
pub struct FullTable<'a, T> {
    values: &'a [T],
    /// `rows[l][len - 1]` is the minimum of `[l, l + len)`.
    rows: Vec<Vec<usize>>,
}

impl<'a, T: Ord> Rmq<'a, T> for FullTable<'a, T> {
    /// Rows are filled from the right end backwards. The answer for
    /// `[l, l+len)` is the better of `[l, l+len-1)` from the row being built
    /// and `[l+1, l+len)` from the row built just before it.
    fn new(values: &'a [T]) -> Self {
        let n = values.len();
        let mut rows: Vec<Vec<usize>> = Vec::with_capacity(n);
        for l in (0..n).rev() {
            let mut row = Vec::with_capacity(n - l);
            row.push(l);
            if let Some(next) = rows.last() {
                for (len, &right) in (2..).zip(next) {
                    let left = row[len - 2];
                    row.push(min_index(values, left, right));
                }
            }
            rows.push(row);
        }
        rows.reverse();

        log::trace!("full table: n={n} entries={}", n * (n + 1) / 2);
        Self { values, rows }
    }

    fn query(&self, range: Range<usize>) -> usize {
        debug_check_range(&range, self.values.len());
        self.rows[range.start][range.len() - 1]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{inputs, test_rmq};

    #[test]
    fn full_table() {
        for a in inputs() {
            test_rmq::<FullTable<u32>>(&a);
        }
    }

    #[test]
    fn rows_are_exactly_sized() {
        let a = [4, 1, 3, 1, 0];
        let rmq = FullTable::new(&a);
        let lens = rmq.rows.iter().map(Vec::len).collect::<Vec<_>>();
        assert_eq!(lens, [5, 4, 3, 2, 1]);
        assert_eq!(rmq.rows[0], [0, 1, 1, 1, 4]);
        assert_eq!(rmq.rows[2], [2, 3, 4]);
    }
}
