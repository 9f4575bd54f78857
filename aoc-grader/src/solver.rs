//! Child-process solver invocation

use crate::error::SolverError;
use std::io::Write;
use std::process::{Command, Stdio};

/// How solver processes are launched
///
/// Every transport resolves to a command line that receives `year day part`
/// as trailing arguments and the puzzle input on stdin, and is expected to
/// emit exactly the answer on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverTransport {
    /// Build and run the solver crate in release mode
    Local,
    /// Forward the input to a deployed solver endpoint via the post-input helper
    Forward { endpoint: String },
    /// Operator-supplied solver command
    Shell { command: String },
}

impl SolverTransport {
    /// Resolve the command line for one (year, day, part) invocation
    pub fn command_line(&self, year: u16, day: u8, part: u8) -> String {
        match self {
            SolverTransport::Local => {
                format!("cargo run --release -q {} {} {}", year, day, part)
            }
            SolverTransport::Forward { endpoint } => {
                format!("./post-input {} {} {} {}", endpoint, year, day, part)
            }
            SolverTransport::Shell { command } => {
                format!("{} {} {} {}", command, year, day, part)
            }
        }
    }
}

/// Run one solver invocation, feeding `input` on stdin
///
/// The command line runs through `sh -c`. The input payload is written fully
/// to the child's stdin and the handle closed, then stdout and stderr are
/// read to completion and the exit status awaited. Exit 0 makes the trimmed
/// stdout the produced answer; any other status is fatal and carries the
/// captured stderr. There is no timeout: a hung solver hangs the run, and
/// the operator kills the process externally.
pub fn invoke(command_line: &str, input: &str) -> Result<String, SolverError> {
    let mut child = Command::new("sh")
        .args(["-c", command_line])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| SolverError::Spawn {
            command_line: command_line.to_string(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .map_err(SolverError::StdinWrite)?;
    }
    // stdin handle is dropped here; the solver sees EOF

    let output = child.wait_with_output().map_err(SolverError::Wait)?;

    if !output.status.success() {
        return Err(SolverError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
