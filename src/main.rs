mod cli;
mod cmdline;
mod energy;
mod error;
mod output;
mod runner;
mod sys;
mod times;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::EnergyError;
use crate::output::Format;
use crate::runner::run_command;

fn main() {
    init_tracing();

    if let Err(err) = real_main() {
        match err {
            EnergyError::Usage => print_usage(),
            other => error::report(&mut io::stderr(), &other),
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn print_usage() {
    let bin = std::env::args()
        .next()
        .unwrap_or_else(|| "cpu-energy".to_string());
    println!("Usage: {bin} <program> [arguments]");
}

fn real_main() -> Result<(), EnergyError> {
    let cli = Cli::parse();
    let format = Format::parse(&cli.output)?;

    let result = run_command(&cli, |command| {
        output::print_launched(&mut io::stdout(), format, command)
    })?;
    output::print_result(&mut io::stdout(), format, &result)?;
    Ok(())
}
