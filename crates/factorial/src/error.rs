use thiserror::Error;

use crate::MAX_INPUT;

pub type Result<T, E = FactorialError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum FactorialError {
    #[error("invalid integer input: {0:?}")]
    InvalidInput(String),
    #[error("factorial of negative number ({0}) is undefined")]
    Domain(i64),
    #[error(
        "factorial of {0} does not fit in 128 bits (largest supported input is {max})",
        max = MAX_INPUT
    )]
    Overflow(i64),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
