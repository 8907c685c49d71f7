//! Per-attempt fetch error and the terminal exhaustion error.

use thiserror::Error;

/// Error returned by a single fetch attempt (curl failure, HTTP error, or empty body).
/// Used so we can classify and log before deciding on the next attempt.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// 2xx response whose body was empty after trimming whitespace.
    #[error("empty response body")]
    EmptyBody,
    /// Anything else (e.g. the transport itself could not be set up).
    #[error("{0}")]
    Other(String),
}

/// Returned when every attempt allowed by the policy has failed.
#[derive(Debug, Error)]
#[error("gave up after {attempts} attempt(s): {last}")]
pub struct RetryError {
    /// Number of attempts actually made.
    pub attempts: u32,
    /// Error from the final attempt.
    pub last: FetchError,
}
