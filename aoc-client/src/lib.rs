//! AOC Client Library
//!
//! Blocking client for the three adventofcode.com interactions a grading run
//! needs: fetching puzzle input, reading the answers already recorded on a
//! puzzle page, and submitting a new answer.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Recorded-answer lookup per part (absent means unsolved, not an error)
//! - Answer submission with parsed feedback, including throttle wait times
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_client::{AocClient, SubmissionResult};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! // Fetch puzzle input
//! let input = client.get_input(2019, 1, session)?;
//!
//! // What does the site already have on record for part 1?
//! match client.get_recorded_answer(2019, 1, 1, session)? {
//!     Some(answer) => println!("Recorded: {}", answer),
//!     None => {
//!         // Nothing recorded yet; submit one
//!         let result = client.submit_answer(2019, 1, 1, "42", session)?;
//!         if result == SubmissionResult::Correct {
//!             println!("Recorded 42 as the answer");
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder, SubmissionResult};
pub use error::AocError;
