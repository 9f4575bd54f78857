//! Error types for the grading harness

use aoc_client::AocError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Top-level harness error
///
/// Every variant is fatal: the first one raised anywhere aborts the whole
/// nested iteration, so a regression is never silently skipped.
#[derive(Error, Debug)]
pub enum GraderError {
    /// Malformed scope override
    #[error("Configuration error: {0}")]
    Config(#[from] ScopeError),

    /// Session store unreadable or malformed
    #[error("Credential store error: {0}")]
    CredentialStore(#[from] SessionStoreError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] AocError),

    /// Input payload or recorded answer could not be fetched
    #[error("Puzzle fetch failed for {year} day {day}: {source}")]
    PuzzleFetch {
        year: u16,
        day: u8,
        #[source]
        source: AocError,
    },

    /// Recording a new answer failed
    #[error("Submission failed for {year} day {day} part {part}: {detail}")]
    Submission {
        year: u16,
        day: u8,
        part: u8,
        detail: String,
    },

    /// Solver child process failed
    #[error("Solver execution failed: {0}")]
    Solver(#[from] SolverError),

    /// Produced answer diverged from the recorded one
    #[error("Answer mismatch for {year} day {day} part {part}: expected {expected:?}, got {got:?}")]
    Mismatch {
        year: u16,
        day: u8,
        part: u8,
        expected: String,
        got: String,
    },
}

/// Scope-override errors; any of these means the run never starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// Day override is not an integer or integer range
    #[error("Invalid day {0:?}: expected a day number or an inclusive range like 5-9")]
    InvalidDay(String),

    /// Day range ends before it starts (rejected, not swapped)
    #[error("Invalid day range: {start}-{end} ends before it starts")]
    EmptyDayRange { start: u8, end: u8 },

    /// Day outside the 1-25 calendar
    #[error("Day {0} is outside the advent calendar (1-25)")]
    DayOutOfRange(u8),
}

/// Session-store errors
#[derive(Error, Debug)]
pub enum SessionStoreError {
    /// Store file could not be read
    #[error("Cannot read session store {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store contents are not a valid profile list
    #[error("Session store {} is not a valid profile list: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Solver invocation errors
#[derive(Error, Debug)]
pub enum SolverError {
    /// Solver process could not be started
    #[error("Cannot start solver {command_line:?}: {source}")]
    Spawn {
        command_line: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the puzzle input to the solver failed
    #[error("Cannot write puzzle input to solver stdin: {0}")]
    StdinWrite(#[source] std::io::Error),

    /// Solver process could not be awaited
    #[error("Cannot collect solver output: {0}")]
    Wait(#[source] std::io::Error),

    /// Solver exited with a failure status; stderr is carried verbatim
    #[error("Solver exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}
