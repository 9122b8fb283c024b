use std::io::Write;

use tracing::instrument;

use crate::{FactorialError, Result, TracePrinter};

/// Largest `n` whose factorial fits in a `u128` (34! < 2^128 < 35!).
pub const MAX_INPUT: i64 = 34;

/// Running products `(i, 1 * 2 * ... * i)` for `i = 1..=n`, in increasing `i`.
#[derive(Clone, Debug)]
pub struct Steps {
    next: u32,
    end: u32,
    partial: u128,
}

impl Iterator for Steps {
    type Item = (u32, u128);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.end {
            return None;
        }
        let i = self.next;
        // Bounded by MAX_INPUT in `steps`.
        self.partial = self.partial.checked_mul(u128::from(i))?;
        self.next += 1;
        Some((i, self.partial))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps {}

/// Validates `n` and returns its step sequence. Empty for `n == 0`.
pub fn steps(n: i64) -> Result<Steps> {
    if n < 0 {
        return Err(FactorialError::Domain(n));
    }
    if n > MAX_INPUT {
        return Err(FactorialError::Overflow(n));
    }
    let end = u32::try_from(n).map_err(|_| FactorialError::Overflow(n))?;
    Ok(Steps {
        next: 1,
        end,
        partial: 1,
    })
}

/// Computes `n!`, emitting every step to `printer` before returning.
///
/// Nothing is printed when `n` is rejected.
#[instrument(level = "debug", skip(printer))]
pub fn compute<W: Write>(n: i64, printer: &mut TracePrinter<W>) -> Result<u128> {
    let mut result = 1;
    for (i, partial) in steps(n)? {
        tracing::debug!(step = i, partial = %partial);
        printer.step(i, partial)?;
        result = partial;
    }
    Ok(result)
}
