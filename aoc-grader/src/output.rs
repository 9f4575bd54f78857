//! Progress and outcome reporting

use crate::driver::RunSummary;
use crate::reconcile::Reconciliation;

/// Formatter for progress markers, per-part outcomes, and the run summary
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Marker emitted before a unit's input is fetched
    pub fn unit_marker(&self, year: u16, day: u8, description: &str) {
        if !self.quiet {
            println!("# Year {}, Day {} - {}", year, day, description);
        }
    }

    /// Marker emitted before each part is graded
    pub fn part_marker(&self, year: u16, day: u8, part: u8, description: &str) {
        if !self.quiet {
            println!("# Year {}, Day {}, part {} - {}", year, day, part, description);
        }
    }

    /// Outcome line for one graded part
    pub fn outcome(&self, year: u16, day: u8, part: u8, answer: &str, outcome: &Reconciliation) {
        if self.quiet {
            println!("{}", answer);
            return;
        }

        let prefix = format!("{}/{:02} Part {}", year, day, part);
        match outcome {
            Reconciliation::Confirmed => {
                println!("{}: {} (✓ confirmed)", prefix, answer);
            }
            Reconciliation::Recorded { at } => {
                println!("{}: {} (★ recorded {})", prefix, answer, at.format("%H:%M:%S"));
            }
        }
    }

    /// Print a summary after a fully successful run
    pub fn print_summary(&self, summary: &RunSummary) {
        if self.quiet {
            return;
        }

        let total = summary.confirmed + summary.recorded;
        println!();
        println!("--- Summary ---");
        println!(
            "Parts graded: {} ({} confirmed, {} recorded)",
            total, summary.confirmed, summary.recorded
        );
        println!(
            "Elapsed wall-clock time: {}",
            format_duration(self.start_time.elapsed())
        );
    }
}

/// Format a duration for display
fn format_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
