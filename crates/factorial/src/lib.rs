//! Factorial of a non-negative integer, reported one partial product at a time.
//!
//! The pipeline is parse → compute → print: [`parse_input`] turns the raw
//! argument into an integer, [`compute`] walks the running products from
//! [`steps`] and hands each one to a [`TracePrinter`], and [`run`] sequences the
//! whole thing against any [`std::io::Write`] sink.

mod driver;
mod engine;
mod error;
mod input;
mod output;
mod printer;

pub use driver::run;
pub use engine::{compute, steps, Steps, MAX_INPUT};
pub use error::{FactorialError, Result};
pub use input::parse_input;
pub use output::TraceOutput;
pub use printer::TracePrinter;
