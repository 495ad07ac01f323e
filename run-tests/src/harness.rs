use std::{
    hint::black_box,
    mem::swap,
    ops::Range,
    time::{Duration, Instant},
};

use rand::{rngs::StdRng, Rng, SeedableRng};
use rmq::{Entry, Rmq, SegmentTree};

use crate::{
    error::{Error, Result},
    kind::RmqKind,
    printer::Printer,
};

/// A range of input sizes, each tested with a number of random builds.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub min: usize,
    pub max: usize,
    pub step: usize,
    pub builds: usize,
    /// Queries per build.
    pub queries: usize,
}

pub const PLAN: [Tier; 3] = [
    Tier {
        min: 1,
        max: 25,
        step: 1,
        builds: 10000,
        queries: 100,
    },
    Tier {
        min: 1000,
        max: 5000,
        step: 1000,
        builds: 1000,
        queries: 10000,
    },
    Tier {
        min: 100000,
        max: 500000,
        step: 100000,
        builds: 5,
        queries: 1000000,
    },
];

/// Run every tier of `plan`, then report completion.
pub fn run_plan(
    rmq: RmqKind,
    plan: &[Tier],
    seed: u64,
    printer: &mut dyn Printer,
) -> Result<()> {
    for tier in plan {
        log::debug!("{rmq}: {tier:?}");
        run_tier(rmq, tier, seed, printer)?;
    }
    printer.finish()
}

/// Every tier starts from the same seed.
fn run_tier(rmq: RmqKind, tier: &Tier, seed: u64, printer: &mut dyn Printer) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);

    for n in (tier.min..=tier.max).step_by(tier.step) {
        printer.start_test(n, tier.builds, tier.queries)?;

        let mut build_time = Duration::ZERO;
        let mut query_time = Duration::ZERO;
        let mut data = vec![Entry::default(); n];

        for _ in 0..tier.builds {
            for x in &mut data {
                *x = Entry::new(rng.gen_range(0..n) as i32);
            }

            // The reference answer.
            let oracle = SegmentTree::new(&data);

            // The structure being tested.
            let start = Instant::now();
            let tested = black_box(rmq.build(&data));
            build_time += start.elapsed();

            for _ in 0..tier.queries {
                let mut low = rng.gen_range(0..n);
                let mut high = rng.gen_range(0..n);
                if low > high {
                    swap(&mut low, &mut high);
                }
                // Half-open ranges.
                high += 1;

                let ours = oracle.query(low..high);

                let start = Instant::now();
                let theirs = black_box(tested.query(low..high));
                query_time += start.elapsed();

                check(rmq, &data, low..high, ours, theirs)?;
            }
        }

        let builds = tier.builds.max(1) as u32;
        let queries = (tier.builds * tier.queries).max(1) as u32;
        printer.report(build_time / builds, query_time / queries)?;
    }
    Ok(())
}

/// `theirs` must be in bounds and hold the same value as `ours`.
fn check(
    rmq: RmqKind,
    data: &[Entry],
    range: Range<usize>,
    ours: usize,
    theirs: usize,
) -> Result<()> {
    let n = data.len();
    let (low, high) = (range.start, range.end);
    if theirs >= n {
        return Err(Error::OutOfBounds {
            rmq,
            n,
            low,
            high,
            answer: theirs,
        });
    }
    if data[ours] != data[theirs] {
        return Err(Error::WrongAnswer {
            rmq,
            n,
            low,
            high,
            ours,
            our_value: data[ours].value(),
            theirs,
            their_value: data[theirs].value(),
        });
    }
    Ok(())
}
