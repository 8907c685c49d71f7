//! Retry and backoff policy.
//!
//! This module encapsulates error classification (timeouts, throttling,
//! connection failures, empty bodies) and exponential backoff decisions so
//! the fetcher stays a thin loop over a transport.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::{FetchError, RetryError};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy, MAX_RETRIES};
pub use run::{run_with_retry, Sleeper, ThreadSleeper};
