//! HTML response parsing utilities

use crate::{SubmissionResult, error::AocError};
use regex::Regex;
use scraper::{Html, Selector};
use std::cell::OnceCell;
use std::time::Duration;

/// Marker text preceding a recorded answer on a puzzle page
const ANSWER_MARKER: &str = "Your puzzle answer was";

/// Parser for AOC HTML responses with cached regex patterns and selectors
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    throttle_regex: OnceCell<Regex>,
    main_selector: OnceCell<Selector>,
    paragraph_selector: OnceCell<Selector>,
    code_selector: OnceCell<Selector>,
}

impl ResponseParser {
    /// Create a new parser with uninitialized caches
    pub fn new() -> Self {
        Self {
            throttle_regex: OnceCell::new(),
            main_selector: OnceCell::new(),
            paragraph_selector: OnceCell::new(),
            code_selector: OnceCell::new(),
        }
    }

    /// Get or compile the throttle duration regex
    fn throttle_regex(&self) -> &Regex {
        self.throttle_regex
            .get_or_init(|| Regex::new(r"You have (.+?) left to wait\.").unwrap())
    }

    /// Get or compile the main element selector
    fn main_selector(&self) -> &Selector {
        self.main_selector
            .get_or_init(|| Selector::parse("main").unwrap())
    }

    /// Get or compile the answer paragraph selector
    fn paragraph_selector(&self) -> &Selector {
        self.paragraph_selector
            .get_or_init(|| Selector::parse("main > p").unwrap())
    }

    /// Get or compile the code element selector
    fn code_selector(&self) -> &Selector {
        self.code_selector
            .get_or_init(|| Selector::parse("code").unwrap())
    }

    /// Extract recorded answers from a puzzle page, in part order
    ///
    /// A solved part shows up as a paragraph reading "Your puzzle answer was
    /// `<code>ANSWER</code>`."; the first such paragraph is part 1, the
    /// second part 2. A page with no such paragraphs is a normal unsolved
    /// puzzle, so this returns an empty vector rather than an error.
    pub fn extract_recorded_answers(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(self.paragraph_selector())
            .filter(|p| {
                p.text()
                    .collect::<String>()
                    .trim_start()
                    .starts_with(ANSWER_MARKER)
            })
            .filter_map(|p| p.select(self.code_selector()).next())
            .map(|code| code.text().collect())
            .collect()
    }

    /// Extract text content from the main element of an HTML document
    pub fn extract_main_text(&self, html: &str) -> Result<String, AocError> {
        let document = Html::parse_document(html);

        let main_element = document
            .select(self.main_selector())
            .next()
            .ok_or(AocError::HtmlParse)?;

        Ok(main_element.text().collect::<String>())
    }

    /// Extract throttle duration from response text
    fn extract_throttle_duration(&self, text: &str) -> Option<Duration> {
        let captures = self.throttle_regex().captures(text)?;
        let duration_str = captures.get(1)?.as_str();
        humantime::parse_duration(duration_str).ok()
    }

    /// Parse submission response and determine the result
    pub fn parse_submission_response(&self, html: &str) -> Result<SubmissionResult, AocError> {
        let text = self.extract_main_text(html)?;

        if text.contains("not the right answer") {
            return Ok(SubmissionResult::Incorrect);
        }

        if text.contains("already complete it") {
            return Ok(SubmissionResult::AlreadyCompleted);
        }

        if text.contains("gave an answer too recently") {
            let wait_time = self.extract_throttle_duration(&text);
            return Ok(SubmissionResult::Throttled { wait_time });
        }

        // If none of the above, assume correct
        Ok(SubmissionResult::Correct)
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
