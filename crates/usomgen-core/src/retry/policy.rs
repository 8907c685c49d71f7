use std::time::Duration;

/// High-level classification of a failed attempt.
///
/// Every kind is retried for the feed fetch; the kind only feeds logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/total).
    Timeout,
    /// Server asked us to slow down (429, 503).
    Throttled,
    /// Network-level failure (connection reset, DNS, TLS handshake, etc.).
    Connection,
    /// Any other non-2xx HTTP status.
    Http(u16),
    /// 2xx with nothing but whitespace in the body.
    EmptyBody,
    /// Anything unexpected.
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Attempt budget exhausted.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Uncapped exponential backoff: `base_delay * 2^attempt_index`, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles for each later one.
    pub base_delay: Duration,
}

/// Attempt budget used when no config overrides it.
pub const MAX_RETRIES: u32 = 8;

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RETRIES,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay after the failed attempt `attempt_index` (zero-based).
    pub fn delay_for(&self, attempt_index: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt_index).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Decide what to do after attempt `attempt_index` (zero-based) failed.
    ///
    /// Returns `RetryDecision::NoRetry` once the final attempt has been made,
    /// so no delay is ever scheduled after the last attempt.
    pub fn decide(&self, attempt_index: u32, _kind: ErrorKind) -> RetryDecision {
        if attempt_index.saturating_add(1) >= self.max_attempts {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.delay_for(attempt_index))
    }
}
