//! Domain resolution: canonicalization, suffix matching, apex computation.
//!
//! Only domain-form hosts reach this stage; IP literals are handled by the
//! address classifier. The suffix match is right-anchored: candidates run
//! from the full host down to the rightmost label, dropping the leftmost
//! label each step, and the first registry hit wins. Since candidates
//! shrink monotonically, the first hit is the longest available suffix.

use crate::config::ParseConfig;
use crate::error::ParseError;
use crate::registry::SuffixRegistry;
use crate::types::SuffixKind;

/// Maximum DNS name length in bytes.
const MAX_HOST_LEN: usize = 253;

/// Outcome of resolving a domain-form host.
#[derive(Debug)]
pub(crate) struct Resolved {
    pub host: String,
    pub apex: String,
    pub tld: String,
    pub kind: Option<SuffixKind>,
    pub is_idna: bool,
}

/// Canonicalize the host, match it against the registry, and compute its
/// apex, applying the www exception and the final length check.
pub(crate) fn resolve(
    host: &str,
    config: &ParseConfig,
    registry: &SuffixRegistry,
) -> Result<Resolved, ParseError> {
    let mut host = host.to_lowercase();
    if host.ends_with('.') {
        host.truncate(host.len() - 1);
    }

    // IDNA transcode; failures are swallowed and only suppress the flag
    let mut is_idna = false;
    if config.allow_idna {
        if let Ok(ascii) = idna::domain_to_ascii(&host) {
            is_idna = ascii.starts_with("xn--");
            host = ascii;
        }
    }

    // longest-available-suffix match, right-anchored
    let labels: Vec<&str> = host.split('.').collect();
    let mut apex = String::new();
    let mut tld = String::new();
    let mut kind = None;
    for boundary in 0..labels.len() {
        let candidate = labels[boundary..].join(".");
        if let Some(tag) = registry.get(&candidate) {
            if candidate.len() == host.len() {
                // a public suffix alone is not a registrable host
                return Err(ParseError::SuffixOnly);
            }
            apex = labels[boundary - 1..].join(".");
            tld = candidate;
            kind = Some(tag);
            break;
        }
    }

    if kind.is_none() && !config.accept_unknown_tld {
        return Err(ParseError::UnknownSuffix);
    }

    // strip a leading "www." unless it sits directly atop the suffix
    // boundary, in which case "www" is the registrable label ("www.fr")
    if config.strip_www && host.starts_with("www.") && tld.len() + 4 != host.len() {
        host.drain(..4);
    }

    if host.len() > MAX_HOST_LEN {
        return Err(ParseError::HostTooLong);
    }

    Ok(Resolved {
        host,
        apex,
        tld,
        kind,
        is_idna,
    })
}
