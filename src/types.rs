//! Core data structures: suffix classification and the parse result.

use std::fmt;

/// Where a matched public suffix came from.
///
/// The registry never stores a "no suffix" tag; absence of an entry is how
/// "not a suffix" is represented, so parse results carry
/// `Option<SuffixKind>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SuffixKind {
    /// ICANN-managed suffix (IANA TLD list or the ICANN section of the
    /// public suffix list).
    Icann,
    /// Privately registered suffix (the private section of the public
    /// suffix list, e.g. "duckdns.org").
    Private,
    /// Local override from a custom suffix list.
    Custom,
}

impl SuffixKind {
    /// Lowercase tag name, matching the `Display` form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SuffixKind::Icann => "icann",
            SuffixKind::Private => "private",
            SuffixKind::Custom => "custom",
        }
    }
}

impl fmt::Display for SuffixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decomposed form of a successfully parsed URL-like string.
///
/// String fields are empty when the segment is absent; `path` carries no
/// leading or trailing slash. Invariants upheld by the parser:
///
/// - `tld` is always a dot-joined suffix of `host`'s labels, so
///   `tld.len() <= host.len()`;
/// - `apex` (when non-empty) is `tld` plus exactly one more label;
/// - `apex` is empty whenever `is_ip` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// Registrable domain (eTLD+1), e.g. "example.co.uk". Empty for IP
    /// hosts and for unknown-suffix hosts accepted by configuration.
    pub apex: String,
    /// Post-normalization host, or the IP literal without brackets.
    pub host: String,
    /// Port digits as written in the input, empty when absent or dropped.
    pub port: String,
    /// Path with surrounding slashes trimmed, empty when absent or dropped.
    pub path: String,
    /// The matched public suffix, e.g. "co.uk". Empty when none matched.
    pub tld: String,
    /// Host is an IP literal (v4 or v6).
    pub is_ip: bool,
    /// Host was transcoded to its ASCII-compatible (punycode) form and
    /// carries the "xn--" prefix.
    pub is_idna: bool,
    /// Classification of the matched suffix; `None` means no suffix
    /// matched (only reachable when unknown TLDs are accepted).
    pub kind: Option<SuffixKind>,
}

impl ParseResult {
    /// Whether the host already is its own apex.
    ///
    /// True for every IP result (an IP has no apex to differ from), and
    /// for domain results whose apex spans the whole host. Length equality
    /// suffices because `apex` is always a suffix of `host`.
    pub fn is_apex(&self) -> bool {
        self.is_ip || (!self.apex.is_empty() && self.apex.len() == self.host.len())
    }
}

impl fmt::Display for ParseResult {
    /// Reconstructs a display form: host (bracketed when it contains ":",
    /// i.e. IPv6), then `:port` and `/path` when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]", self.host)?;
        } else {
            f.write_str(&self.host)?;
        }
        if !self.port.is_empty() {
            write!(f, ":{}", self.port)?;
        }
        if !self.path.is_empty() {
            write!(f, "/{}", self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_kind_display() {
        assert_eq!(SuffixKind::Icann.to_string(), "icann");
        assert_eq!(SuffixKind::Private.to_string(), "private");
        assert_eq!(SuffixKind::Custom.to_string(), "custom");
    }

    #[test]
    fn test_display_domain() {
        let result = ParseResult {
            host: "example.com".to_string(),
            port: "8080".to_string(),
            path: "a/b".to_string(),
            ..Default::default()
        };
        assert_eq!(result.to_string(), "example.com:8080/a/b");
    }

    #[test]
    fn test_display_ipv6_bracketed() {
        let result = ParseResult {
            host: "acca::2222".to_string(),
            port: "5678".to_string(),
            is_ip: true,
            ..Default::default()
        };
        assert_eq!(result.to_string(), "[acca::2222]:5678");
    }

    #[test]
    fn test_display_bare_host() {
        let result = ParseResult {
            host: "example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(result.to_string(), "example.com");
    }

    #[test]
    fn test_is_apex() {
        let mut result = ParseResult {
            host: "example.com".to_string(),
            apex: "example.com".to_string(),
            ..Default::default()
        };
        assert!(result.is_apex());

        result.host = "blog.example.com".to_string();
        assert!(!result.is_apex());

        // IP results compare as apex even though the apex field is empty.
        let ip = ParseResult {
            host: "165.44.22.11".to_string(),
            is_ip: true,
            ..Default::default()
        };
        assert!(ip.is_apex());
    }
}
