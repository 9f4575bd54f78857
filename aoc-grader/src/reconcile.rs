//! Answer reconciliation against the remote record

use crate::error::GraderError;
use aoc_client::{AocClient, SubmissionResult};
use chrono::{DateTime, Local};

/// Successful outcome of grading one part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// The recorded answer matched the produced answer; nothing was written
    Confirmed,
    /// No answer was recorded; the produced answer is now on record
    Recorded { at: DateTime<Local> },
}

/// Compare a produced answer with the remote record for the same part
///
/// The record for the part being graded is authoritative. An absent record
/// means the produced answer gets submitted and must be accepted; a present
/// record is only ever compared, never overwritten. Exact string equality
/// decides between confirmation and a mismatch, and a mismatch aborts the
/// whole run.
pub fn reconcile(
    client: &AocClient,
    session: &str,
    year: u16,
    day: u8,
    part: u8,
    produced: &str,
) -> Result<Reconciliation, GraderError> {
    let recorded = client
        .get_recorded_answer(year, day, part, session)
        .map_err(|source| GraderError::PuzzleFetch { year, day, source })?;

    match recorded {
        Some(expected) if expected == produced => Ok(Reconciliation::Confirmed),
        Some(expected) => Err(GraderError::Mismatch {
            year,
            day,
            part,
            expected,
            got: produced.to_string(),
        }),
        None => record_answer(client, session, year, day, part, produced),
    }
}

/// Submit a produced answer for a part with no recorded answer yet
///
/// Anything but an accepted submission is fatal; in particular a throttled
/// submission is reported, not waited out.
fn record_answer(
    client: &AocClient,
    session: &str,
    year: u16,
    day: u8,
    part: u8,
    produced: &str,
) -> Result<Reconciliation, GraderError> {
    let outcome = client
        .submit_answer(year, day, part, produced, session)
        .map_err(|source| GraderError::Submission {
            year,
            day,
            part,
            detail: source.to_string(),
        })?;

    match outcome {
        SubmissionResult::Correct => Ok(Reconciliation::Recorded { at: Local::now() }),
        SubmissionResult::Incorrect => Err(GraderError::Submission {
            year,
            day,
            part,
            detail: format!("answer {:?} was rejected as incorrect", produced),
        }),
        SubmissionResult::AlreadyCompleted => Err(GraderError::Submission {
            year,
            day,
            part,
            detail: "service reports the part as already answered, \
                     but no recorded answer was visible"
                .to_string(),
        }),
        SubmissionResult::Throttled { wait_time } => Err(GraderError::Submission {
            year,
            day,
            part,
            detail: match wait_time {
                Some(wait) => format!("rate limited, {}s left to wait", wait.as_secs()),
                None => "rate limited".to_string(),
            },
        }),
    }
}
