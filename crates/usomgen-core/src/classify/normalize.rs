//! URL canonicalization for the `urls.txt` output.

/// True when `line` already starts with `http://` or `https://`. Case-sensitive.
pub fn has_http_scheme(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://")
}

/// Prepend `http://` when no scheme is present and drop exactly one trailing `/`.
///
/// ```
/// use usomgen_core::classify::normalize_url;
/// assert_eq!(normalize_url("example.com/path"), "http://example.com/path");
/// assert_eq!(normalize_url("https://example.com//"), "https://example.com/");
/// ```
pub fn normalize_url(line: &str) -> String {
    let line = line.trim();
    let mut url = if has_http_scheme(line) {
        line.to_string()
    } else {
        format!("http://{}", line)
    };
    if url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_scheme_when_missing() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
        assert_eq!(normalize_url("example.com/path"), "http://example.com/path");
    }

    #[test]
    fn keeps_existing_scheme() {
        assert_eq!(normalize_url("https://evil.com/x"), "https://evil.com/x");
    }

    #[test]
    fn uppercase_scheme_is_not_recognized() {
        assert!(!has_http_scheme("HTTP://Evil.com"));
        assert_eq!(normalize_url("HTTP://Evil.com"), "http://HTTP://Evil.com");
        assert_eq!(normalize_url("Https://evil.com/"), "http://Https://evil.com");
    }

    #[test]
    fn strips_one_trailing_slash_only() {
        assert_eq!(normalize_url("http://evil.com/"), "http://evil.com");
        assert_eq!(normalize_url("evil.com/a//"), "http://evil.com/a/");
    }

    #[test]
    fn other_schemes_are_treated_as_missing() {
        assert_eq!(normalize_url("ftp://files.evil.com"), "http://ftp://files.evil.com");
    }

    #[test]
    fn short_lines_do_not_panic() {
        assert!(!has_http_scheme("http"));
        assert!(!has_http_scheme(""));
        assert!(!has_http_scheme("ğğğ"));
        assert_eq!(normalize_url("/"), "http://");
    }
}
