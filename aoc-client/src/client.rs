//! Blocking HTTP client for adventofcode.com

use crate::error::AocError;
use crate::parser::ResponseParser;
use reqwest::header::HeaderValue;
use zeroize::Zeroize;

/// Result of an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Answer was correct
    Correct,
    /// Answer was incorrect
    Incorrect,
    /// Problem was already completed
    AlreadyCompleted,
    /// Submission was throttled
    Throttled {
        /// Optional wait time before next submission
        wait_time: Option<std::time::Duration>,
    },
}

/// The main AOC client
///
/// Provides the three operations a grading run needs: fetching puzzle input,
/// reading the answers already recorded on the puzzle page, and submitting a
/// new answer.
///
/// # Example
///
/// ```no_run
/// use aoc_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let input = client.get_input(2019, 1, session)?;
/// let recorded = client.get_recorded_answer(2019, 1, 1, session)?;
/// println!("input: {} bytes, part 1 answer: {:?}", input.len(), recorded);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a new client with rustls-tls configuration and no redirect policy
    ///
    /// Redirects are never followed; on authenticated endpoints they mean the
    /// session cookie was rejected, and the caller should see that as a
    /// failure rather than a silently-followed login page.
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is marked sensitive and the temporary cookie string is
    /// zeroized after use.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()))?;

        let mut sensitive_header = header_value;
        sensitive_header.set_sensitive(true);
        cookie_string.zeroize();

        Ok(sensitive_header)
    }

    /// GET a path built from the given segments, with the session cookie attached
    fn get_authenticated(
        &self,
        segments: &[&str],
        session: &str,
    ) -> Result<reqwest::blocking::Response, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(segments);

        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        Ok(response)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// Downloads the personalized puzzle input. Any non-2xx status (expired
    /// session, puzzle not yet available, unknown day) is an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let input = client.get_input(2019, 1, "your_session_cookie")?;
    /// println!("Input length: {} bytes", input.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let response = self.get_authenticated(
            &[&year.to_string(), "day", &day.to_string(), "input"],
            session,
        )?;
        response.text().map_err(|_| AocError::Encoding)
    }

    /// Read the answer recorded on the puzzle page for one part
    ///
    /// Fetches `/{year}/day/{day}` and looks for the "Your puzzle answer was"
    /// paragraphs the site renders once a part is solved. Returns `Ok(None)`
    /// when the part is still unsolved; that is a normal outcome, not an
    /// error. Only transport failures and non-2xx statuses are errors.
    pub fn get_recorded_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        session: &str,
    ) -> Result<Option<String>, AocError> {
        let response =
            self.get_authenticated(&[&year.to_string(), "day", &day.to_string()], session)?;
        let html = response.text().map_err(|_| AocError::Encoding)?;

        let answers = self.parser.extract_recorded_answers(&html);
        Ok(answers.into_iter().nth(usize::from(part) - 1))
    }

    /// Submit an answer for a puzzle part
    ///
    /// POSTs the answer and parses the HTML response into a
    /// [`SubmissionResult`]: `Correct`, `Incorrect`, `AlreadyCompleted`, or
    /// `Throttled` (with the parsed wait time when the page names one).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_client::{AocClient, SubmissionResult};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let result = client.submit_answer(2019, 1, 1, "42", "your_session_cookie")?;
    /// if result == SubmissionResult::Correct {
    ///     println!("Correct!");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
        session: &str,
    ) -> Result<SubmissionResult, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), "answer"]);

        let form = [("level", part.to_string()), ("answer", answer.to_string())];

        let response = self
            .client
            .post(url)
            .header("Cookie", cookie_header)
            .form(&form)
            .send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        let html = response.text().map_err(|_| AocError::Encoding)?;
        self.parser.parse_submission_response(&html)
    }
}

/// Builder for configuring an AOC client
///
/// Allows overriding the base URL (pointing the client at a mock server in
/// tests) and the underlying reqwest builder (timeouts, proxies). The
/// redirect policy is always forced to `Policy::none()`.
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// The URL is parsed and validated at builder time, catching errors early.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder
    ///
    /// The redirect policy will be overridden to `Policy::none()` regardless
    /// of the provided builder configuration.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = self.base_url.unwrap_or_else(|| {
            reqwest::Url::parse("https://adventofcode.com")
                .expect("Default base URL should always be valid")
        });

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
