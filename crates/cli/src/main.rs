use std::{env, io, process::ExitCode};

use clap::{error::ErrorKind, Parser};
use eyre::Result;
use factorial_trace::{run, FactorialError};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compute n! and print every partial product",
    long_about = None
)]
struct Cli {
    /// Integer to take the factorial of (defaults to 0)
    #[arg(allow_negative_numbers = true)]
    n: Option<String>,

    /// Log engine spans and steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    // Anything clap cannot place, such as `-abc` or a second value, is bad input
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            let raw = env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ");
            eprintln!("Error: {}", FactorialError::InvalidInput(raw));
            return Ok(ExitCode::FAILURE);
        }
    };

    // stdout carries the trace, so logs go to stderr
    if cli.verbose {
        fmt::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_writer(io::stderr)
            .init();
    }

    match run(cli.n.as_deref(), io::stdout().lock()) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(FactorialError::Io(err)) => Err(err.into()),
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
