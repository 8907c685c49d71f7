//! Syntactic hostname check shared by the Pi-hole and Adblock outputs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Dot-separated labels of 1-63 alphanumerics/hyphens, no label starting or
/// ending with a hyphen. Whole-string match.
static HOSTNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("hostname pattern is valid")
});

pub fn is_valid_hostname(text: &str) -> bool {
    HOSTNAME_PATTERN.is_match(text.trim())
}
