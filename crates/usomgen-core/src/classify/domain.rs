//! Host extraction and public-suffix-aware domain splitting.
//!
//! The split is delegated to a [`DomainSplitter`] so the classifier does not
//! care where the suffix data comes from. The production splitter wraps
//! `tldextract`, which ships a bundled Public Suffix List snapshot.

use anyhow::{Context, Result};
use tldextract::{TldExtractor, TldOption};

use super::normalize::has_http_scheme;

/// `(full_hostname, registrable_domain, suffix)` for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainInfo {
    /// The whole host string.
    pub full_hostname: String,
    /// `domain.suffix` when both are known, otherwise the full hostname.
    pub registrable_domain: String,
    /// Matched public suffix, empty when none matched.
    pub suffix: String,
}

impl DomainInfo {
    /// Fallback when structured parsing failed: the literal stands in for
    /// both the hostname and the registrable domain.
    pub fn literal(line: &str) -> Self {
        Self {
            full_hostname: line.to_string(),
            registrable_domain: line.to_string(),
            suffix: String::new(),
        }
    }
}

/// Registrable label and public suffix of a hostname. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostParts {
    pub domain: Option<String>,
    pub suffix: Option<String>,
}

/// Splits a hostname at its longest matching public suffix rule.
pub trait DomainSplitter {
    fn split(&self, host: &str) -> Result<HostParts>;
}

/// Public Suffix List splitter backed by `tldextract`.
pub struct PslSplitter {
    extractor: TldExtractor,
}

impl PslSplitter {
    /// ICANN section only; private registrations (e.g. `blogspot.com`) are
    /// treated as ordinary domains.
    pub fn new() -> Self {
        Self {
            extractor: TldExtractor::new(TldOption::default()),
        }
    }
}

impl Default for PslSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainSplitter for PslSplitter {
    /// Lookup is case-insensitive; the returned labels keep the casing of
    /// `host`. A lookup error is treated as "no known suffix".
    fn split(&self, host: &str) -> Result<HostParts> {
        let res = match self
            .extractor
            .extract(&format!("http://{}", host.to_ascii_lowercase()))
        {
            Ok(res) => res,
            Err(e) => {
                tracing::debug!("suffix lookup failed for {}: {:?}", host, e);
                return Ok(HostParts::default());
            }
        };
        let suffix_labels = match res.suffix.filter(|s| !s.is_empty()) {
            Some(s) => s.split('.').count(),
            None => return Ok(HostParts::default()),
        };
        let has_domain = res.domain.map_or(false, |d| !d.is_empty());

        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() < suffix_labels {
            return Ok(HostParts::default());
        }
        let cut = labels.len() - suffix_labels;
        let domain = if has_domain && cut > 0 {
            Some(labels[cut - 1].to_string())
        } else {
            None
        };
        Ok(HostParts {
            domain,
            suffix: Some(labels[cut..].join(".")),
        })
    }
}

/// Host part of an entry exactly as written, without userinfo or port.
///
/// The authority runs from after the scheme (or from the start of a line
/// without one) to the first `/`, `?` or `#`. When it is empty the first
/// path segment is used instead. Bracketed IPv6 hosts must parse.
pub fn extract_host(line: &str) -> Result<String> {
    let line = line.trim();
    let rest = if has_http_scheme(line) {
        line.split_once("://").map_or(line, |(_, rest)| rest)
    } else {
        line
    };
    let is_delim = |c: char| matches!(c, '/' | '?' | '#');
    let (authority, path) = rest.split_at(rest.find(is_delim).unwrap_or(rest.len()));
    let authority = authority.rsplit('@').next().unwrap_or_default();
    let authority = if authority.is_empty() {
        path.trim_start_matches('/')
            .split(is_delim)
            .next()
            .unwrap_or_default()
    } else {
        authority
    };

    let host = if authority.starts_with('[') {
        let end = authority
            .find(']')
            .with_context(|| format!("unterminated IPv6 host in {}", line))?;
        let bracketed = &authority[..=end];
        url::Host::parse(bracketed)
            .with_context(|| format!("invalid IPv6 host {}", bracketed))?;
        bracketed
    } else {
        authority.split(':').next().unwrap_or_default()
    };
    if host.is_empty() {
        anyhow::bail!("no host in {}", line);
    }
    Ok(host.to_string())
}

/// Derive `DomainInfo` for an entry; never fails.
///
/// Any parse or lookup error degrades to [`DomainInfo::literal`] so the entry
/// is still offered to the hostname outputs. The second value reports
/// whether that fallback was taken.
pub fn domain_info<D: DomainSplitter + ?Sized>(splitter: &D, line: &str) -> (DomainInfo, bool) {
    let attempt = extract_host(line).and_then(|host| {
        let parts = splitter.split(&host)?;
        Ok((host, parts))
    });
    match attempt {
        Ok((host, parts)) => {
            let registrable_domain = match (&parts.domain, &parts.suffix) {
                (Some(domain), Some(suffix)) => format!("{}.{}", domain, suffix),
                _ => host.clone(),
            };
            let info = DomainInfo {
                full_hostname: host,
                registrable_domain,
                suffix: parts.suffix.unwrap_or_default(),
            };
            (info, false)
        }
        Err(e) => {
            tracing::debug!("domain extraction failed ({}): {:#}", line, e);
            (DomainInfo::literal(line), true)
        }
    }
}
