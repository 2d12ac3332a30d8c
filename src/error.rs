//! Error types for URL parsing and classification.

use thiserror::Error;

/// Reasons a parse is rejected.
///
/// A rejection is total: no `ParseError` ever carries partial parse state,
/// so callers never see a half-populated result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing usable remained after stripping scheme, userinfo, query,
    /// fragment, and path.
    #[error("empty authority after normalization")]
    EmptyAuthority,

    /// The host is an IP literal that is unspecified, loopback, or in a
    /// private range, none of which identify an independently addressable
    /// endpoint.
    #[error("IP address is unspecified, loopback, or private")]
    ReservedAddress,

    /// The configuration restricts results to IP literals but the host
    /// parsed as a domain name.
    #[error("host is not an IP literal")]
    ExpectedIp,

    /// The configuration restricts results to domain names but the host
    /// parsed as an IP literal.
    #[error("host is an IP literal, not a domain")]
    ExpectedDomain,

    /// No registry suffix matched the host and unknown TLDs are not
    /// accepted by the configuration.
    #[error("no public suffix matched the host")]
    UnknownSuffix,

    /// The matched suffix consumes the entire host; a public suffix alone
    /// is not a registrable host.
    #[error("host is a bare public suffix")]
    SuffixOnly,

    /// The final host exceeds the 253-byte DNS name ceiling.
    #[error("host exceeds maximum DNS name length of 253 bytes")]
    HostTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::EmptyAuthority.to_string(),
            "empty authority after normalization"
        );
        assert_eq!(
            ParseError::HostTooLong.to_string(),
            "host exceeds maximum DNS name length of 253 bytes"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ParseError::SuffixOnly, ParseError::SuffixOnly);
        assert_ne!(ParseError::SuffixOnly, ParseError::UnknownSuffix);
    }
}
