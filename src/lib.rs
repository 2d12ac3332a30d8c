//! apexurl - public-suffix-aware URL decomposition
//!
//! This crate decomposes an arbitrary URL-like string into its structural
//! parts (host, port, path, effective TLD or "public suffix", apex or
//! eTLD+1, and IP-address form) and classifies the matched suffix as
//! ICANN-managed, privately registered, or custom/local. It serves callers
//! who need canonical host identity (cookie scoping, dedup, rate limiting
//! by registrable domain) rather than raw string equality.
//!
//! "com" is a TLD and also a public suffix; "co.uk" is not a TLD but is an
//! eTLD, because that is where registrars branch. "amazon.co.uk",
//! "books.amazon.co.uk", and "www.books.amazon.co.uk" all share the apex
//! "amazon.co.uk". There is no closed-form algorithm for this split: it
//! is data driven, which is what the [`SuffixRegistry`] is for.
//!
//! # Quick Start
//!
//! ```
//! use apexurl::{parse, ParseConfig, SuffixKind, SuffixRegistry};
//!
//! let registry = SuffixRegistry::builder()
//!     .suffix("com", SuffixKind::Icann)
//!     .suffix("co.uk", SuffixKind::Icann)
//!     .build();
//! let config = ParseConfig::new();
//!
//! let result = parse("http://www.example.com:80/path/page", &config, &registry)?;
//! assert_eq!(result.host, "example.com");
//! assert_eq!(result.apex, "example.com");
//! assert_eq!(result.tld, "com");
//! assert_eq!(result.port, "80");
//! assert_eq!(result.path, "path/page");
//! assert_eq!(result.kind, Some(SuffixKind::Icann));
//! assert_eq!(result.to_string(), "example.com:80/path/page");
//! # Ok::<(), apexurl::ParseError>(())
//! ```
//!
//! # Pipeline
//!
//! raw string → authority extraction → IP-vs-domain classification →
//! (IP literal) or (suffix resolution against the registry) →
//! [`ParseResult`], gated throughout by [`ParseConfig`].
//!
//! - IP literals (v4 and v6, bracketed or not) short-circuit suffix
//!   resolution; unspecified, loopback, and private addresses are
//!   rejected.
//! - Domain hosts are lowercased, optionally IDNA-transcoded, and matched
//!   right-anchored against the registry: the longest available suffix
//!   wins, the apex is that suffix plus one more label, and a bare public
//!   suffix is rejected.
//! - A leading "www." is stripped unless "www" itself is the registrable
//!   label ("www.fr" stays "www.fr").
//!
//! # Error Handling
//!
//! Parsing either succeeds with a fully populated [`ParseResult`] or
//! rejects with a [`ParseError`] naming the cause; no partial state ever
//! escapes. IDNA transcoding failures are not rejections; they only
//! suppress the `is_idna` flag.
//!
//! # Concurrency
//!
//! [`parse`] is pure and mutates nothing it is given. A built
//! [`SuffixRegistry`] is read-only; refreshes should build a new registry
//! and publish it (see [`Parser`]) rather than mutate a live one.

pub use config::{ParseConfig, Restrict};
pub use error::ParseError;
pub use parser::{parse, Parser};
pub use registry::{SuffixRegistry, SuffixRegistryBuilder};
pub use types::{ParseResult, SuffixKind};

mod address;
pub mod config;
pub mod error;
mod normalizer;
pub mod parser;
pub mod registry;
mod resolver;
pub mod types;
