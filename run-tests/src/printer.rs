use std::{io::Write, time::Duration};

use itertools::Itertools;

use crate::error::Result;

/// Reports the progress of a test run.
pub trait Printer {
    fn start_test(&mut self, n: usize, builds: usize, queries: usize) -> Result<()>;
    /// Mean time of one build and of one query.
    fn report(&mut self, build: Duration, query: Duration) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

/// `1234567` -> `1,234,567`.
pub fn with_commas(n: u128) -> String {
    n.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(String::from_utf8_lossy)
        .join(",")
}

/// Human-readable report.
pub struct Pretty<W> {
    out: W,
}

impl<W: Write> Pretty<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Printer for Pretty<W> {
    fn start_test(&mut self, n: usize, builds: usize, queries: usize) -> Result<()> {
        writeln!(
            self.out,
            "Testing size {} ({} builds, {} queries / build)",
            with_commas(n as u128),
            with_commas(builds as u128),
            with_commas(queries as u128),
        )?;
        Ok(())
    }

    fn report(&mut self, build: Duration, query: Duration) -> Result<()> {
        writeln!(self.out, "  Mean build time: {} ns", with_commas(build.as_nanos()))?;
        writeln!(self.out, "  Mean query time: {} ns", with_commas(query.as_nanos()))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.out, "All tests completed!")?;
        Ok(())
    }
}

/// One `elements,build,query` row per size, times in nanoseconds.
pub struct Csv<W> {
    out: W,
}

impl<W: Write> Csv<W> {
    /// Writes the header line.
    pub fn new(mut out: W) -> Result<Self> {
        writeln!(out, "Elements,Mean Build Time,Mean Query Time")?;
        Ok(Self { out })
    }
}

impl<W: Write> Printer for Csv<W> {
    fn start_test(&mut self, n: usize, _builds: usize, _queries: usize) -> Result<()> {
        write!(self.out, "{n}")?;
        self.out.flush()?;
        Ok(())
    }

    fn report(&mut self, build: Duration, query: Duration) -> Result<()> {
        writeln!(self.out, ",{},{}", build.as_nanos(), query.as_nanos())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
