use std::net::IpAddr;

/// Full-string IPv4 or IPv6 literal. No CIDR suffixes, ports, brackets or
/// surrounding text.
pub fn is_ip_literal(text: &str) -> bool {
    text.trim().parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v4_and_v6() {
        assert!(is_ip_literal("8.8.8.8"));
        assert!(is_ip_literal("::1"));
        assert!(is_ip_literal("2001:db8::ff00:42:8329"));
        assert!(is_ip_literal("::ffff:192.0.2.1"));
    }

    #[test]
    fn partial_or_decorated_addresses() {
        assert!(!is_ip_literal("8.8.8"));
        assert!(!is_ip_literal("8.8.8.8/32"));
        assert!(!is_ip_literal("8.8.8.8:53"));
        assert!(!is_ip_literal("[::1]"));
        assert!(!is_ip_literal("http://8.8.8.8"));
        assert!(!is_ip_literal("256.1.1.1"));
        assert!(!is_ip_literal("example.com"));
    }
}
