//! IP-vs-domain classification and port extraction.
//!
//! Works on the trimmed authority produced by the normalizer. Bracketed
//! IPv6 forms are unwrapped before the strict `IpAddr` parse; a bare
//! authority with no dot is left whole so unbracketed IPv6 literals still
//! parse.

use std::net::IpAddr;

/// Host and port split out of an authority. The host may still be either
/// an IP literal or a domain name at this point.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Authority<'a> {
    pub host: &'a str,
    pub port: &'a str,
}

/// Split `host[:port]`, handling the bracketed IPv6 forms.
pub(crate) fn split_host_port(authority: &str, keep_port: bool) -> Authority<'_> {
    let (host, port) = if authority.starts_with('[') && authority.ends_with(']') {
        // bracketed IPv6 without port
        (&authority[1..authority.len() - 1], "")
    } else if let Some((host, port)) = authority
        .strip_prefix('[')
        .and_then(|rest| rest.split_once("]:"))
    {
        // bracketed IPv6 with port
        (host, port)
    } else if authority.contains('.') {
        // domain or IPv4, optionally ported
        match authority.split_once(':') {
            Some((host, port)) => (host, port),
            None => (authority, ""),
        }
    } else {
        // single label or unbracketed IPv6; no port to extract
        (authority, "")
    };

    Authority {
        host,
        port: if keep_port { port } else { "" },
    }
}

/// Strict IP-literal parse. Returns `None` for domain names.
pub(crate) fn parse_ip(host: &str) -> Option<IpAddr> {
    host.parse().ok()
}

/// Whether the address fails to identify an independently addressable
/// endpoint: unspecified, loopback, or private (RFC 1918 for v4,
/// unique-local fc00::/7 for v6).
pub(crate) fn is_reserved(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_unspecified() || v4.is_loopback() || v4.is_private(),
        IpAddr::V6(v6) => {
            v6.is_unspecified() || v6.is_loopback() || (v6.segments()[0] & 0xfe00) == 0xfc00
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_with_port() {
        let authority = split_host_port("example.com:8080", true);
        assert_eq!(authority.host, "example.com");
        assert_eq!(authority.port, "8080");
    }

    #[test]
    fn test_domain_without_port() {
        let authority = split_host_port("example.com", true);
        assert_eq!(authority.host, "example.com");
        assert_eq!(authority.port, "");
    }

    #[test]
    fn test_port_dropped_when_disabled() {
        let authority = split_host_port("example.com:8080", false);
        assert_eq!(authority.host, "example.com");
        assert_eq!(authority.port, "");
    }

    #[test]
    fn test_bracketed_ipv6() {
        let authority = split_host_port("[acca::2222]", true);
        assert_eq!(authority.host, "acca::2222");
        assert_eq!(authority.port, "");

        let authority = split_host_port("[acca::2222]:5678", true);
        assert_eq!(authority.host, "acca::2222");
        assert_eq!(authority.port, "5678");
    }

    #[test]
    fn test_unbracketed_ipv6_keeps_colons() {
        // no dot, so the colon is not a port separator
        let authority = split_host_port("acca::2222", true);
        assert_eq!(authority.host, "acca::2222");
        assert_eq!(authority.port, "");
    }

    #[test]
    fn test_ip_detection() {
        assert!(parse_ip("165.44.22.11").is_some());
        assert!(parse_ip("acca::2222").is_some());
        assert!(parse_ip("example.com").is_none());
        assert!(parse_ip("999.1.1.1").is_none());
    }

    #[test]
    fn test_reserved_addresses() {
        for addr in ["0.0.0.0", "127.0.0.1", "10.1.2.3", "172.16.0.1", "192.168.1.1", "::", "::1", "fc00::1", "fd12::34"] {
            let ip: IpAddr = addr.parse().unwrap();
            assert!(is_reserved(ip), "{addr} should be reserved");
        }
        for addr in ["165.44.22.11", "8.8.8.8", "acca::2222", "2001:db8::1"] {
            let ip: IpAddr = addr.parse().unwrap();
            assert!(!is_reserved(ip), "{addr} should be addressable");
        }
    }
}
