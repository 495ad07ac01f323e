use std::ops::Range;

use crate::{debug_check_range, min_index, scan_min, sparse_table::Levels, Rmq};

/// O(1) query, O(n) words of space.
///
/// The input is cut into blocks of `b ≈ lg(n) / 4` elements. A sparse table
/// over the block minima answers the part of a query covering whole blocks.
/// The partial blocks at either end are answered from a table of all in-block
/// answers, which is shared between blocks with the same Cartesian tree shape.
/// There are fewer than `4^b ≈ √n` shapes.
///
/// # References
///
/// \[1\] Johannes Fischer and Volker Heun. _Theoretical and Practical
/// Improvements on the RMQ-Problem, with Applications to LCA and LCE_.
/// DOI: [10.1007/11780441_5]
///
/// [10.1007/11780441_5]: https://doi.org/10.1007/11780441_5
pub struct FischerHeun<'a, T> {
    values: &'a [T],
    block_size: usize,
    /// Sparse table over the position of each block's minimum.
    sparse: Levels,
    /// Shape of each block, as an index into `tables`.
    block_table: Vec<usize>,
    /// `tables[t][i * b + j]` is the offset of the minimum of offsets `[i, j]`
    /// of any block with the shape of table `t`.
    tables: Vec<Vec<u8>>,
}

/// Keeps shape numbers below `4^16` and in-block offsets in a `u8`.
const MAX_BLOCK_SIZE: usize = 16;

/// Number identifying the Cartesian tree of `block`, as if it had length `b`.
///
/// Simulates the stack-based construction, writing a `0` for every pop and a
/// `1` for every push. Missing trailing elements are treated as larger than
/// everything, so they only push. The first bit is always a `1`, so the
/// result is below `4^b` and distinct shapes get distinct numbers.
///
/// Two blocks with the same number have, for every position, the same nearest
/// position to its left holding a smaller or equal value. That determines the
/// leftmost minimum of every subrange.
fn shape<T: Ord>(block: &[T], b: usize, stack: &mut Vec<usize>) -> usize {
    stack.clear();
    let mut number = 0;
    for (i, x) in block.iter().enumerate() {
        while stack.last().is_some_and(|&top| block[top] > *x) {
            stack.pop();
            number <<= 1;
        }
        stack.push(i);
        number = (number << 1) | 1;
    }
    for _ in block.len()..b {
        number = (number << 1) | 1;
    }
    number
}

/// The in-block answer table of `block`, for a block of size `b`.
fn in_block_table<T: Ord>(block: &[T], b: usize) -> Vec<u8> {
    let mut table = vec![0; b * b];
    for i in 0..block.len() {
        let mut best = i;
        for j in i..block.len() {
            best = min_index(block, best, j);
            table[i * b + j] = best as u8;
        }
    }
    table
}

impl<'a, T: Ord> FischerHeun<'a, T> {
    /// Position of the minimum of offsets `[i, j]` (inclusive) of `block`.
    #[inline]
    fn in_block(&self, block: usize, i: usize, j: usize) -> usize {
        let b = self.block_size;
        block * b + self.tables[self.block_table[block]][i * b + j] as usize
    }
}

impl<'a, T: Ord> Rmq<'a, T> for FischerHeun<'a, T> {
    fn new(values: &'a [T]) -> Self {
        let n = values.len();
        let block_size = if n <= 1 {
            1
        } else {
            (n.ilog2() as usize).div_ceil(4).clamp(1, MAX_BLOCK_SIZE)
        };
        let b = block_size;

        let block_min = values
            .chunks(b)
            .enumerate()
            .map(|(i, block)| i * b + scan_min(block, 0..block.len()))
            .collect::<Vec<_>>();
        let blocks = block_min.len();
        let sparse = Levels::over(values, block_min);

        // Table index for every possible shape, filled on first use.
        let mut shape_table: Vec<Option<usize>> = vec![None; 1 << (2 * b)];
        let mut tables = vec![];
        let mut stack = Vec::with_capacity(b);
        let block_table = values
            .chunks(b)
            .map(|block| {
                let slot = &mut shape_table[shape(block, b, &mut stack)];
                *slot.get_or_insert_with(|| {
                    tables.push(in_block_table(block, b));
                    tables.len() - 1
                })
            })
            .collect();

        log::trace!(
            "fischer-heun: n={n} block_size={b} blocks={} shapes={}",
            blocks,
            tables.len()
        );
        Self {
            values,
            block_size,
            sparse,
            block_table,
            tables,
        }
    }

    fn query(&self, range: Range<usize>) -> usize {
        debug_check_range(&range, self.values.len());
        let b = self.block_size;
        let (l, r) = (range.start, range.end - 1);
        let (lb, rb) = (l / b, r / b);

        if lb == rb {
            return self.in_block(lb, l % b, r % b);
        }

        let head = self.in_block(lb, l % b, b - 1);
        let tail = self.in_block(rb, 0, r % b);
        let best = if lb + 1 < rb {
            let middle = self.sparse.query(self.values, lb + 1..rb);
            min_index(self.values, head, middle)
        } else {
            head
        };
        min_index(self.values, best, tail)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{inputs, naive, test_rmq};

    #[test]
    fn fischer_heun() {
        for a in inputs() {
            test_rmq::<FischerHeun<u32>>(&a);
        }
    }

    #[test]
    fn large_blocks() {
        // n = 2^12 gives blocks of 3 elements, with a short last block.
        let a = (0..4097).map(|_| rand::random::<u32>() % 8).collect::<Vec<_>>();
        let rmq = FischerHeun::new(&a);
        assert_eq!(rmq.block_size, 3);
        for _ in 0..20000 {
            let i = rand::random::<usize>() % a.len();
            let j = i + 1 + rand::random::<usize>() % (a.len() - i);
            assert_eq!(rmq.query(i..j), naive(&a, i..j), "range {i}..{j}");
        }
    }

    #[test]
    fn shapes() {
        let mut stack = vec![];
        let mut code = |block: &[u32], b| shape(block, b, &mut stack);
        // Push only.
        assert_eq!(code(&[1, 2, 3], 3), 0b111);
        // Every element pops the previous one.
        assert_eq!(code(&[3, 2, 1], 3), 0b10101);
        // Equal values do not pop.
        assert_eq!(code(&[2, 2, 2], 3), 0b111);
        // Missing elements only push.
        assert_eq!(code(&[2, 1], 3), code(&[2, 1, 9], 3));
        // Same relative order, same shape.
        assert_eq!(code(&[10, 30, 20, 5], 4), code(&[1, 3, 2, 0], 4));
        assert_ne!(code(&[1, 2], 2), code(&[2, 1], 2));
        assert!(code(&[4, 3, 2, 1], 4) < 1 << 8);
    }

    #[test]
    fn same_shape_same_answers() {
        let mut stack = vec![];
        let b = 4;
        let blocks = (0..2000)
            .map(|_| (0..b).map(|_| rand::random::<u32>() % 5).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let mut tables = vec![None; 1 << (2 * b)];
        for block in &blocks {
            let table = in_block_table(block, b);
            let slot = &mut tables[shape(block, b, &mut stack)];
            assert_eq!(slot.get_or_insert_with(|| table.clone()), &table, "{block:?}");
        }
    }

    #[test]
    fn tables_are_shared() {
        // Blocks of a periodic input repeat, and so do their shapes.
        let a = [3u32, 1, 2, 0].repeat(1000);
        let rmq = FischerHeun::new(&a);
        assert_eq!(rmq.block_size, 3);
        assert!(rmq.tables.len() <= 4);
    }
}
