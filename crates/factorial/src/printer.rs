use std::io::{self, Write};

/// Writes the human-readable trace: start line, one line per step, result.
#[derive(Debug)]
pub struct TracePrinter<W> {
    out: W,
}

impl<W: Write> TracePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn start(&mut self, n: i64) -> io::Result<()> {
        writeln!(self.out, "Starting factorial computation for n={n}")
    }

    pub fn step(&mut self, i: u32, partial: u128) -> io::Result<()> {
        writeln!(self.out, " Step {i}: -> {partial}")
    }

    /// Prints the summary line followed by the bare result on its own line.
    pub fn finish(&mut self, n: i64, result: u128) -> io::Result<()> {
        writeln!(self.out, "Factorial of {n} is {result}")?;
        writeln!(self.out, "{result}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
