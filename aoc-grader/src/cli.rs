//! CLI argument parsing using clap
//!
//! Scope selection and transport selection are env-backed (`AOC_YEAR`,
//! `AOC_DAY`, `AOC_PART`, `AOC_API`, `AOC_SOLVER`) so a run can be scoped
//! from the environment without touching the command line.

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver grading harness
#[derive(Parser, Debug)]
#[command(
    name = "aoc-grade",
    about = "Grade Advent of Code solvers against recorded answers",
    version
)]
pub struct Args {
    /// Year to grade (grades all supported years if omitted)
    #[arg(short, long, env = "AOC_YEAR")]
    pub year: Option<u16>,

    /// Day or inclusive day range to grade, e.g. "7" or "5-9" (grades days 1-25 if omitted)
    #[arg(short, long, env = "AOC_DAY")]
    pub day: Option<String>,

    /// Part to grade (grades both parts if omitted)
    #[arg(short, long, env = "AOC_PART", value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Forward solver invocations to a deployed endpoint instead of building locally
    #[arg(long, env = "AOC_API")]
    pub api: Option<String>,

    /// Grade with an arbitrary solver command instead of the built-in
    /// transports; receives "year day part" as trailing arguments and the
    /// puzzle input on stdin. Takes precedence over --api.
    #[arg(long, env = "AOC_SOLVER")]
    pub solver: Option<String>,

    /// Path to the session store
    #[arg(long, default_value = "~/.advent-of-code.json")]
    pub sessions_file: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
