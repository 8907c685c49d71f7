//! Fetch the USOM malicious URL list and re-emit it as four block lists:
//! raw IPs, normalized URLs, Pi-hole domains and Adblock/uBlock rules.

pub mod classify;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod retry;
