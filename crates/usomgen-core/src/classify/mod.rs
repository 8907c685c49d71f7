//! Line classification and normalization.
//!
//! Each non-blank, non-comment line of the feed is either an IP literal
//! (goes to `ips.txt` and nowhere else) or a hostname/URL candidate, which
//! feeds the URL list and, when syntactically valid, the Pi-hole and
//! Adblock lists. Lines are independent; order only matters for progress
//! logging.

mod categories;
mod domain;
mod hostname;
mod ip;
mod normalize;

pub use categories::{Categories, Category, CategorySets};
pub use domain::{
    domain_info, extract_host, DomainInfo, DomainSplitter, HostParts, PslSplitter,
};
pub use hostname::is_valid_hostname;
pub use ip::is_ip_literal;
pub use normalize::{has_http_scheme, normalize_url};

/// Log a progress line every this many input lines.
const PROGRESS_EVERY: usize = 1000;

/// Counters gathered while classifying one feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyStats {
    /// Lines in the feed, including blanks and comments.
    pub total_lines: usize,
    /// Blank and `#` comment lines.
    pub skipped: usize,
    /// Lines recognized as IP literals (before dedup).
    pub ips: usize,
    /// Lines treated as hostname/URL candidates (before dedup).
    pub candidates: usize,
    /// Candidates whose domain extraction fell back to the literal line.
    pub degraded: usize,
}

/// What happened to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Skipped,
    Ip,
    Candidate { degraded: bool },
}

/// Adblock/uBlock network rule matching any scheme and subdomain.
pub fn adblock_rule(registrable_domain: &str) -> String {
    format!("*://*.{}/*", registrable_domain)
}

pub struct Classifier<D = PslSplitter> {
    splitter: D,
}

impl Classifier<PslSplitter> {
    pub fn new() -> Self {
        Self::with_splitter(PslSplitter::new())
    }
}

impl Default for Classifier<PslSplitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DomainSplitter> Classifier<D> {
    pub fn with_splitter(splitter: D) -> Self {
        Self { splitter }
    }

    /// Classify a whole feed into four deduplicated sets.
    pub fn classify(&self, feed: &str) -> CategorySets {
        let mut sets = CategorySets::new();
        let lines: Vec<&str> = feed.trim().lines().collect();
        let total = lines.len();
        tracing::info!("classifying {} lines", total);

        for (i, raw) in lines.into_iter().enumerate() {
            let outcome = self.classify_line(raw, &mut sets);
            if outcome != LineOutcome::Skipped && (i + 1) % PROGRESS_EVERY == 0 {
                tracing::info!("processed {}/{}", i + 1, total);
            }
        }
        sets.stats.total_lines = total;

        for category in Category::ALL {
            tracing::info!("{}: {} entries", category, sets.get(category).len());
        }
        sets
    }

    /// Classify one raw line into `sets`.
    pub fn classify_line(&self, raw: &str, sets: &mut CategorySets) -> LineOutcome {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            sets.stats.skipped += 1;
            return LineOutcome::Skipped;
        }

        if is_ip_literal(line) {
            sets.insert(Category::Ips, line.to_string());
            sets.stats.ips += 1;
            return LineOutcome::Ip;
        }

        sets.insert(Category::Urls, normalize_url(line));

        let (info, degraded) = domain_info(&self.splitter, line);
        if is_valid_hostname(&info.full_hostname) {
            sets.insert(Category::PiholeDomains, info.full_hostname.clone());
        }
        let registrable = &info.registrable_domain;
        if !registrable.is_empty() && registrable.contains('.') && is_valid_hostname(registrable)
        {
            sets.insert(Category::AdblockRules, adblock_rule(registrable));
        }

        sets.stats.candidates += 1;
        if degraded {
            sets.stats.degraded += 1;
        }
        LineOutcome::Candidate { degraded }
    }
}

/// Classify `feed` with the bundled Public Suffix List and freeze the result.
pub fn classify(feed: &str) -> Categories {
    Classifier::new().classify(feed).freeze()
}
