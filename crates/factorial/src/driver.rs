use std::io::Write;

use crate::{compute, parse_input, Result, TracePrinter};

/// Parses `arg`, computes its factorial and writes the full trace to `out`.
///
/// Invalid input fails before anything is written. A rejected `n` fails after
/// the start line. The caller reports the error and picks the exit status.
pub fn run<W: Write>(arg: Option<&str>, out: W) -> Result<u128> {
    let n = parse_input(arg)?;
    tracing::info!(n, "starting factorial computation");

    let mut printer = TracePrinter::new(out);
    printer.start(n)?;
    let result = compute(n, &mut printer)?;
    printer.finish(n, result)?;
    Ok(result)
}
