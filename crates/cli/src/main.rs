//! confstruct - resolve typed configuration variables from the command line.
//!
//! Responsibilities:
//! - Parse field specifications and source selection flags.
//! - Resolve every field in one pass and print the values.
//! - Print every configuration problem at once and exit non-zero.
//!
//! Does NOT handle:
//! - Loading `.env` from the working directory implicitly; use `--env-file`.
//!
//! Invariants:
//! - Logs go to stderr so stdout only carries resolved values.
//! - Log verbosity is controlled by `RUST_LOG`.

mod args;
mod error;
mod field;
mod output;
mod resolve;

use args::Cli;
use clap::Parser;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(e.exit_code().as_i32());
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let source = resolve::open_source(cli)?;
    let values = resolve::resolve(&source, &cli.fields)?;
    output::render(&values, cli.format)
}
