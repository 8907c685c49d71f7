//! Feed retrieval with bounded exponential-backoff retry.
//!
//! An attempt only counts as a success when the server answers 2xx and the
//! body holds something other than whitespace. Everything else is logged
//! and retried until the policy's attempt budget runs out.

mod transport;

pub use transport::{CurlTransport, HttpResponse, Transport, TransportOptions};

use anyhow::Context;

use crate::config::GeneratorConfig;
use crate::retry::{run_with_retry, FetchError, RetryError, RetryPolicy, Sleeper, ThreadSleeper};

/// Raw feed text as downloaded. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFeed(String);

impl RawFeed {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, as reported in logs.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Decode body bytes as UTF-8, dropping malformed sequences instead of failing.
pub fn decode_body(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Turn one transport response into a feed, or the failure to retry on.
pub fn accept_response(resp: HttpResponse) -> Result<RawFeed, FetchError> {
    if !(200..300).contains(&resp.status) {
        return Err(FetchError::Http(resp.status));
    }
    let text = decode_body(&resp.body);
    if text.trim().is_empty() {
        return Err(FetchError::EmptyBody);
    }
    Ok(RawFeed(text))
}

pub struct Fetcher<T, S = ThreadSleeper> {
    url: String,
    transport: T,
    policy: RetryPolicy,
    sleeper: S,
}

impl Fetcher<CurlTransport, ThreadSleeper> {
    /// Build the production fetcher: curl transport, real sleeps.
    pub fn from_config(cfg: &GeneratorConfig) -> anyhow::Result<Self> {
        let transport =
            CurlTransport::new(&cfg.transport_options()).context("failed to set up HTTP client")?;
        Ok(Self::new(
            cfg.source_url.clone(),
            transport,
            cfg.retry_policy(),
            ThreadSleeper,
        ))
    }
}

impl<T: Transport, S: Sleeper> Fetcher<T, S> {
    pub fn new(url: String, transport: T, policy: RetryPolicy, sleeper: S) -> Self {
        Self {
            url,
            transport,
            policy,
            sleeper,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Fetch the feed, retrying on any failure. Attempts run strictly one
    /// after another.
    pub fn fetch(&mut self) -> Result<RawFeed, RetryError> {
        let Self {
            url,
            transport,
            policy,
            sleeper,
        } = self;
        let max = policy.max_attempts;

        let result = run_with_retry(&*policy, &*sleeper, |attempt| {
            tracing::info!("fetching {} (attempt {}/{})", url, attempt + 1, max);
            let resp = transport.get(url)?;
            accept_response(resp)
        });

        match &result {
            Ok(feed) => tracing::info!("fetched feed ({} characters)", feed.char_count()),
            Err(e) => tracing::error!("fetching {} failed: {}", url, e),
        }
        result
    }
}
