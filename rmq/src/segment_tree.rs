use std::ops::Range;

use crate::{debug_check_range, min_index, Rmq};

/// O(lg n) query, O(n) words of space.
///
/// A balanced binary tree over index ranges. The root covers `[0, n)` and the
/// children of a node cover the two halves of its range, split at
/// `mid = low + (high - low) / 2`. Every node caches the minimum of its range.
///
/// A query that straddles the midpoint of a node splits into `[l, mid)` and
/// `[mid, r)`. Both halves are flush against an edge of their child, and a
/// flush range either equals its node's range or recurses into at most one
/// child that is not an exact match. So after the first split every step does
/// O(1) work and the query visits O(lg n) nodes.
pub struct SegmentTree<'a, T> {
    values: &'a [T],
    /// `None` for an empty input.
    root: Option<Node>,
}

struct Node {
    range: Range<usize>,
    min: usize,
    /// `None` for leaves, which cover a single position.
    children: Option<Box<(Node, Node)>>,
}

impl Node {
    fn build<T: Ord>(values: &[T], range: Range<usize>) -> Node {
        if range.len() == 1 {
            return Node {
                min: range.start,
                range,
                children: None,
            };
        }
        let mid = range.start + range.len() / 2;
        let left = Node::build(values, range.start..mid);
        let right = Node::build(values, mid..range.end);
        Node {
            min: min_index(values, left.min, right.min),
            range,
            children: Some(Box::new((left, right))),
        }
    }

    /// `visit` is called on every node the query reaches, before recursing.
    fn query<T: Ord>(
        &self,
        values: &[T],
        range: Range<usize>,
        visit: &mut impl FnMut(&Range<usize>, &Range<usize>),
    ) -> usize {
        visit(&self.range, &range);
        if range == self.range {
            return self.min;
        }
        let Some(children) = &self.children else {
            unreachable!("leaf {:?} queried for {range:?}", self.range);
        };
        let (left, right) = &**children;
        let mid = left.range.end;
        if range.end <= mid {
            return left.query(values, range, visit);
        }
        if range.start >= mid {
            return right.query(values, range, visit);
        }
        let l = left.query(values, range.start..mid, visit);
        let r = right.query(values, mid..range.end, visit);
        min_index(values, l, r)
    }
}

impl<'a, T: Ord> Rmq<'a, T> for SegmentTree<'a, T> {
    fn new(values: &'a [T]) -> Self {
        let root = (!values.is_empty()).then(|| Node::build(values, 0..values.len()));
        log::trace!(
            "segment tree: n={} nodes={}",
            values.len(),
            (2 * values.len()).saturating_sub(1)
        );
        Self { values, root }
    }

    fn query(&self, range: Range<usize>) -> usize {
        debug_check_range(&range, self.values.len());
        let Some(root) = &self.root else {
            unreachable!("query {range:?} on an empty segment tree");
        };
        root.query(self.values, range, &mut |_, _| {})
    }
}
