//! Basic usage example for the AOC client
//!
//! Fetches the input for one puzzle, checks what answer is recorded for
//! part 1, and submits one if nothing is recorded yet.
//!
//! Requires a valid session cookie in the AOC_SESSION environment variable
//! (copy it from your browser's cookies after logging in to adventofcode.com).

use aoc_client::{AocClient, SubmissionResult};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = std::env::var("AOC_SESSION").expect("AOC_SESSION environment variable not set");

    let client = AocClient::new()?;

    let year = 2019;
    let day = 1;

    println!("Fetching input for year {} day {}...", year, day);
    let input = client.get_input(year, day, &session)?;
    println!("✓ Input fetched ({} bytes)", input.len());

    println!("Looking up recorded answer for part 1...");
    match client.get_recorded_answer(year, day, 1, &session)? {
        Some(answer) => {
            println!("✓ Part 1 already answered: {}", answer);
        }
        None => {
            println!("Part 1 unsolved; submitting a guess...");
            match client.submit_answer(year, day, 1, "12345", &session)? {
                SubmissionResult::Correct => println!("✓ Answer accepted"),
                SubmissionResult::Incorrect => println!("✗ Answer rejected"),
                SubmissionResult::AlreadyCompleted => println!("ℹ Part already completed"),
                SubmissionResult::Throttled { wait_time } => match wait_time {
                    Some(d) => println!("⏱ Throttled, wait {:?}", d),
                    None => println!("⏱ Throttled"),
                },
            }
        }
    }

    Ok(())
}
