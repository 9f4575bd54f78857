//! AOC grading harness - batch-verifies solver output against recorded answers
//!
//! For every scoped (account, year, day, part), fetches the puzzle input,
//! runs the configured solver with the input on stdin, and reconciles the
//! solver's output with the answer recorded on adventofcode.com: a match is
//! confirmed, a missing record is filled in by submission, and a divergence
//! aborts the whole run.

mod cli;
mod config;
mod driver;
mod error;
mod output;
mod reconcile;
mod scope;
mod sessions;
mod solver;

use aoc_client::AocClient;
use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::GraderError> {
    let config = Config::from_args(args)?;
    let profiles = sessions::load(&config.sessions_file)?;
    let client = AocClient::new()?;

    let formatter = OutputFormatter::new(config.quiet);
    let summary = driver::run(&config, &profiles, &client, &formatter)?;
    formatter.print_summary(&summary);

    Ok(())
}
