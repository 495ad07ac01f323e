mod error;
mod harness;
mod kind;
mod printer;

use std::io;

use anyhow::Context;
use clap::Parser;

use crate::{
    kind::RmqKind,
    printer::{Csv, Pretty, Printer},
};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Output {
    /// Human-readable.
    Default,
    /// Comma-separated values.
    Csv,
}

/// Check an RMQ structure against a segment tree on random inputs, and time
/// its builds and queries.
#[derive(clap::Parser)]
struct Args {
    /// The structure to test, e.g. `HybridRMQ` or `sparse`.
    #[clap(long)]
    rmq: RmqKind,
    /// Seed of the random inputs.
    #[clap(long, default_value_t = 0)]
    seed: u64,
    #[clap(long, value_enum, default_value_t = Output::Default)]
    output: Output,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(
        env_logger::Env::new()
            .filter("RMQ_LOG")
            .write_style("RMQ_LOG_STYLE"),
    );
    let args = Args::parse();
    log::info!("Testing {} with seed {}", args.rmq, args.seed);

    let out = io::stdout().lock();
    let mut printer: Box<dyn Printer> = match args.output {
        Output::Default => Box::new(Pretty::new(out)),
        Output::Csv => Box::new(Csv::new(out)?),
    };
    harness::run_plan(args.rmq, &harness::PLAN, args.seed, printer.as_mut())
        .with_context(|| format!("testing {} failed", args.rmq))?;
    Ok(())
}
