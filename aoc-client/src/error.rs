//! Error types for the AOC client

use thiserror::Error;

/// Errors that can occur when talking to adventofcode.com
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    ///
    /// Redirects land here too: the client never follows them, and a
    /// redirect on an authenticated endpoint means the session was rejected.
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Failed to parse HTML response
    #[error("Failed to parse HTML response")]
    HtmlParse,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
