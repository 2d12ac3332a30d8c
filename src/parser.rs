//! The parse pipeline: normalization, address classification, and domain
//! resolution wired together.
//!
//! [`parse`] is a pure function over `(input, config, registry)`: it
//! mutates neither argument and builds a fresh [`ParseResult`] per call,
//! so any number of callers may share one config and one registry
//! concurrently. [`Parser`] bundles the two for call sites that parse with
//! a fixed policy.

use std::sync::Arc;

use crate::address;
use crate::config::{ParseConfig, Restrict};
use crate::error::ParseError;
use crate::normalizer;
use crate::registry::SuffixRegistry;
use crate::resolver;
use crate::types::ParseResult;

/// Decompose a URL-like string into its structural parts.
///
/// Either succeeds with a fully populated [`ParseResult`] or rejects with
/// a [`ParseError`]; there is no partial success.
///
/// ```
/// use apexurl::{parse, ParseConfig, SuffixRegistry, SuffixKind};
///
/// let registry = SuffixRegistry::builder()
///     .suffix("com", SuffixKind::Icann)
///     .build();
/// let result = parse("http://www.example.com", &ParseConfig::new(), &registry).unwrap();
/// assert_eq!(result.host, "example.com");
/// assert_eq!(result.apex, "example.com");
/// assert_eq!(result.tld, "com");
/// ```
pub fn parse(
    input: &str,
    config: &ParseConfig,
    registry: &SuffixRegistry,
) -> Result<ParseResult, ParseError> {
    let (raw_authority, path) = normalizer::split_authority(input, config.keep_path);
    let authority = address::split_host_port(raw_authority, config.keep_port);
    if authority.host.is_empty() {
        return Err(ParseError::EmptyAuthority);
    }

    let ip = address::parse_ip(authority.host);
    if let Some(ip) = ip {
        if address::is_reserved(ip) {
            return Err(ParseError::ReservedAddress);
        }
    }
    let is_ip = ip.is_some();

    // host-form gates; ApexOnly tolerates IPs the way no restriction does
    if config.restrict == Restrict::HostOnly && is_ip {
        return Err(ParseError::ExpectedDomain);
    }
    if config.restrict == Restrict::IpOnly && !is_ip {
        return Err(ParseError::ExpectedIp);
    }

    let mut port = authority.port.to_string();
    let mut path = path.unwrap_or("").to_string();

    if is_ip {
        return Ok(ParseResult {
            host: authority.host.to_string(),
            port,
            path,
            is_ip: true,
            ..Default::default()
        });
    }

    let resolved = resolver::resolve(authority.host, config, registry)?;
    let mut host = resolved.host;
    if config.restrict == Restrict::ApexOnly {
        // an unknown-suffix host has no apex to substitute
        if resolved.apex.is_empty() {
            return Err(ParseError::UnknownSuffix);
        }
        host.clone_from(&resolved.apex);
        port.clear();
        path.clear();
    }

    Ok(ParseResult {
        apex: resolved.apex,
        host,
        port,
        path,
        tld: resolved.tld,
        is_ip: false,
        is_idna: resolved.is_idna,
        kind: resolved.kind,
    })
}

/// A suffix registry and a parse configuration bundled behind `&self`.
///
/// The registry sits behind an [`Arc`] so refreshed snapshots can be
/// published to new parsers while in-flight parses keep reading the old
/// one.
#[derive(Debug, Clone)]
pub struct Parser {
    registry: Arc<SuffixRegistry>,
    config: ParseConfig,
}

impl Parser {
    /// Bundle a registry snapshot with a configuration.
    pub fn new(registry: Arc<SuffixRegistry>, config: ParseConfig) -> Self {
        Self { registry, config }
    }

    /// Parse with the bundled configuration and registry.
    pub fn parse(&self, input: &str) -> Result<ParseResult, ParseError> {
        parse(input, &self.config, &self.registry)
    }

    /// Number of suffixes in the bundled registry.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether the bundled registry holds no suffixes.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The bundled configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }
}
