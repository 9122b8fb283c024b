use crate::{FactorialError, Result};

/// Reads the optional command-line argument as a base-10 integer.
///
/// A missing argument means `0`. Surrounding whitespace is ignored. Negative
/// values are accepted here and rejected by the engine. Anything that is not a
/// plain integer (`"3.0"`, `"1e3"`) is an [`FactorialError::InvalidInput`].
pub fn parse_input(arg: Option<&str>) -> Result<i64> {
    match arg {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| FactorialError::InvalidInput(raw.to_owned())),
    }
}
