//! Sequential run driver

use crate::config::Config;
use crate::error::GraderError;
use crate::output::OutputFormatter;
use crate::reconcile::{self, Reconciliation};
use crate::sessions::SessionProfile;
use crate::solver;
use aoc_client::AocClient;

/// Counts reported after a fully successful run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Parts whose recorded answer matched the solver output
    pub confirmed: usize,
    /// Parts that had no recorded answer before this run
    pub recorded: usize,
}

/// Grade every scoped part for every profile, strictly in order
///
/// Iteration is profile → year → day → part; the input payload is fetched
/// once per (profile, day) and shared by both parts of that unit. Execution
/// is single-threaded on purpose: the service rate-limits per account, and
/// an abort must have an unambiguous first divergent unit. The first error
/// of any kind stops the entire nested iteration.
pub fn run(
    config: &Config,
    profiles: &[SessionProfile],
    client: &AocClient,
    formatter: &OutputFormatter,
) -> Result<RunSummary, GraderError> {
    let mut summary = RunSummary::default();

    for profile in profiles {
        for item in config.scope.work_items() {
            formatter.unit_marker(item.year, item.day, &profile.description);

            let input = client
                .get_input(item.year, item.day, &profile.cookie)
                .map_err(|source| GraderError::PuzzleFetch {
                    year: item.year,
                    day: item.day,
                    source,
                })?;

            for part in item.parts.clone() {
                formatter.part_marker(item.year, item.day, part, &profile.description);

                let command_line = config.transport.command_line(item.year, item.day, part);
                let produced = solver::invoke(&command_line, &input)?;

                let outcome = reconcile::reconcile(
                    client,
                    &profile.cookie,
                    item.year,
                    item.day,
                    part,
                    &produced,
                )?;
                formatter.outcome(item.year, item.day, part, &produced, &outcome);

                match outcome {
                    Reconciliation::Confirmed => summary.confirmed += 1,
                    Reconciliation::Recorded { .. } => summary.recorded += 1,
                }
            }
        }
    }

    Ok(summary)
}
