/// A value stored in an RMQ structure.
///
/// Wraps an `i32` so that values are never confused with the `usize`
/// positions returned by queries. There is no `From<i32>`; use [`Entry::new`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entry(i32);

impl Entry {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn orders_like_the_wrapped_value() {
        let mut v = [3, -7, 0, 12, -7].map(Entry::new);
        v.sort();
        assert_eq!(v.map(Entry::value), [-7, -7, 0, 3, 12]);
        assert!(Entry::new(-1) < Entry::new(1));
        assert_eq!(Entry::default(), Entry::new(0));
    }
}
