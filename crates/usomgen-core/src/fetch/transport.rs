//! One-shot HTTP GET over libcurl.

use crate::retry::FetchError;
use std::time::Duration;

/// Status and raw body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs a single GET. Implementations must not retry internally.
pub trait Transport {
    fn get(&mut self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Connection parameters that stay constant across attempts.
#[derive(Debug, Clone)]
pub struct TransportOptions {
    pub user_agent: String,
    /// Total time bound for one attempt.
    pub timeout: Duration,
}

/// Connect phase never gets more than this, even with a larger total timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Curl-backed transport. The easy handle is created once and reused for
/// every attempt, so its connection cache lives exactly as long as the run.
pub struct CurlTransport {
    easy: curl::easy::Easy,
}

impl CurlTransport {
    pub fn new(opts: &TransportOptions) -> Result<Self, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.useragent(&opts.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(CONNECT_TIMEOUT.min(opts.timeout))?;
        easy.timeout(opts.timeout)?;
        Ok(Self { easy })
    }
}

impl Transport for CurlTransport {
    fn get(&mut self, url: &str) -> Result<HttpResponse, FetchError> {
        let mut body = Vec::new();
        self.easy.url(url)?;
        self.easy.get(true)?;
        {
            let mut transfer = self.easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let status = self.easy.response_code()?;
        Ok(HttpResponse { status, body })
    }
}
