use std::{fmt, ops::Range, str::FromStr};

use rmq::{BlockSummary, Entry, FischerHeun, FullTable, MaskRmq, Rmq, SegmentTree, SparseTable};

use crate::error::Error;

/// The RMQ structures the harness can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RmqKind {
    Precomputed,
    SparseTable,
    SegmentTree,
    Hybrid,
    FischerHeun,
    Fastest,
}

/// A built structure of any kind.
pub enum AnyRmq<'a> {
    Precomputed(FullTable<'a, Entry>),
    SparseTable(SparseTable<'a, Entry>),
    SegmentTree(SegmentTree<'a, Entry>),
    Hybrid(BlockSummary<'a, Entry>),
    FischerHeun(FischerHeun<'a, Entry>),
    Fastest(MaskRmq<'a, Entry>),
}

impl RmqKind {
    #[cfg(test)]
    pub const ALL: [RmqKind; 6] = [
        RmqKind::Precomputed,
        RmqKind::SparseTable,
        RmqKind::SegmentTree,
        RmqKind::Hybrid,
        RmqKind::FischerHeun,
        RmqKind::Fastest,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RmqKind::Precomputed => "PrecomputedRMQ",
            RmqKind::SparseTable => "SparseTableRMQ",
            RmqKind::SegmentTree => "SegmentTreeRMQ",
            RmqKind::Hybrid => "HybridRMQ",
            RmqKind::FischerHeun => "FischerHeunRMQ",
            RmqKind::Fastest => "FastestRMQ",
        }
    }

    pub fn build(self, values: &[Entry]) -> AnyRmq<'_> {
        match self {
            RmqKind::Precomputed => AnyRmq::Precomputed(FullTable::new(values)),
            RmqKind::SparseTable => AnyRmq::SparseTable(SparseTable::new(values)),
            RmqKind::SegmentTree => AnyRmq::SegmentTree(SegmentTree::new(values)),
            RmqKind::Hybrid => AnyRmq::Hybrid(BlockSummary::new(values)),
            RmqKind::FischerHeun => AnyRmq::FischerHeun(FischerHeun::new(values)),
            RmqKind::Fastest => AnyRmq::Fastest(MaskRmq::new(values)),
        }
    }
}

impl AnyRmq<'_> {
    #[inline]
    pub fn query(&self, range: Range<usize>) -> usize {
        match self {
            AnyRmq::Precomputed(rmq) => rmq.query(range),
            AnyRmq::SparseTable(rmq) => rmq.query(range),
            AnyRmq::SegmentTree(rmq) => rmq.query(range),
            AnyRmq::Hybrid(rmq) => rmq.query(range),
            AnyRmq::FischerHeun(rmq) => rmq.query(range),
            AnyRmq::Fastest(rmq) => rmq.query(range),
        }
    }
}

impl fmt::Display for RmqKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive, ignores a file extension, so `HybridRMQ.cpp` or
/// `hybridrmq.h` select [`RmqKind::Hybrid`]. Short names like `hybrid` work
/// too.
impl FromStr for RmqKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.split('.').next().unwrap_or_default().to_lowercase();
        let name = name.strip_suffix("rmq").unwrap_or(&name);
        match name.trim_end_matches(['-', '_']) {
            "precomputed" | "full" => Ok(RmqKind::Precomputed),
            "sparsetable" | "sparse" => Ok(RmqKind::SparseTable),
            "segmenttree" | "segment" => Ok(RmqKind::SegmentTree),
            "hybrid" | "block" => Ok(RmqKind::Hybrid),
            "fischerheun" | "fischer-heun" => Ok(RmqKind::FischerHeun),
            "fastest" | "mask" => Ok(RmqKind::Fastest),
            _ => Err(Error::UnknownRmq(s.to_string())),
        }
    }
}
