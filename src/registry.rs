//! The suffix registry: an immutable-after-build map from dotted suffix to
//! classification tag.
//!
//! The registry is the data half of public-suffix matching. There is no
//! closed-form algorithm for eTLD detection, so the parser consults this
//! table. How the underlying text is acquired (network fetch, on-disk
//! cache, refresh cadence) is the caller's concern; the builder only parses
//! already-acquired text in the three formats the ecosystem actually ships:
//! the IANA TLD list, the Mozilla public suffix `.dat` list, and a local
//! custom list.
//!
//! Loaders applied later overwrite tags loaded earlier for the same suffix,
//! so call order is the precedence policy. Once built, the registry is
//! read-only and safe to share across threads; refreshes should build a new
//! registry and swap it in (e.g. behind an `Arc`) rather than mutate a live
//! one.

use std::collections::HashMap;

use crate::types::SuffixKind;

/// Read-only suffix classification table.
#[derive(Debug, Clone, Default)]
pub struct SuffixRegistry {
    map: HashMap<String, SuffixKind>,
}

impl SuffixRegistry {
    /// Start building a registry.
    pub fn builder() -> SuffixRegistryBuilder {
        SuffixRegistryBuilder::default()
    }

    /// Exact-string lookup of a lowercase dotted suffix.
    pub fn get(&self, suffix: &str) -> Option<SuffixKind> {
        self.map.get(suffix).copied()
    }

    /// Number of registered suffixes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the registry holds no suffixes.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Accumulates suffix entries from one or more sources.
#[derive(Debug, Clone, Default)]
pub struct SuffixRegistryBuilder {
    map: HashMap<String, SuffixKind>,
}

impl SuffixRegistryBuilder {
    /// Register a single suffix. The key is lowercased on insert.
    pub fn suffix(mut self, suffix: &str, kind: SuffixKind) -> Self {
        let key = suffix.trim().to_lowercase();
        if !key.is_empty() {
            self.map.insert(key, kind);
        }
        self
    }

    /// Load the IANA `tlds-alpha-by-domain.txt` format: one TLD per line,
    /// `#` comment lines, entries uppercase in the source. Everything loads
    /// as [`SuffixKind::Icann`].
    pub fn icann_tlds(mut self, text: &str) -> Self {
        for line in text.lines() {
            let row = line.trim();
            if row.is_empty() || row.starts_with('#') {
                continue;
            }
            self.map.insert(row.to_lowercase(), SuffixKind::Icann);
        }
        self
    }

    /// Load the Mozilla `effective_tld_names.dat` format. The
    /// `BEGIN ICANN DOMAINS` and `BEGIN PRIVATE DOMAINS` markers inside
    /// `//` comments switch the tag applied to subsequent rows; rows before
    /// the first marker are skipped. Wildcard rules are flattened by
    /// stripping the leading `*.`.
    pub fn public_suffix_list(mut self, text: &str) -> Self {
        let mut kind: Option<SuffixKind> = None;
        for line in text.lines() {
            let row = line.trim();
            if row.is_empty() {
                continue;
            }
            if row.starts_with("//") {
                if row.contains("BEGIN ICANN DOMAINS") {
                    kind = Some(SuffixKind::Icann);
                } else if row.contains("BEGIN PRIVATE DOMAINS") {
                    kind = Some(SuffixKind::Private);
                }
                continue;
            }
            if let Some(kind) = kind {
                let row = row.strip_prefix("*.").unwrap_or(row);
                // exception rules ("!city.kobe.jp") carve out of wildcard
                // rules, which are already flattened; skip them
                if row.starts_with('!') {
                    continue;
                }
                self.map.insert(row.to_lowercase(), kind);
            }
        }
        self
    }

    /// Load a local custom suffix list: one suffix per line, `#` and `//`
    /// comment lines. Everything loads as [`SuffixKind::Custom`].
    pub fn custom_suffixes(mut self, text: &str) -> Self {
        for line in text.lines() {
            let row = line.trim();
            if row.is_empty() || row.starts_with('#') || row.starts_with("//") {
                continue;
            }
            self.map.insert(row.to_lowercase(), SuffixKind::Custom);
        }
        self
    }

    /// Finish building; the result never changes again.
    pub fn build(self) -> SuffixRegistry {
        SuffixRegistry { map: self.map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_suffix_lowercased() {
        let registry = SuffixRegistry::builder()
            .suffix("Co.UK", SuffixKind::Icann)
            .build();
        assert_eq!(registry.get("co.uk"), Some(SuffixKind::Icann));
        assert_eq!(registry.get("Co.UK"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_icann_tld_format() {
        let text = "# Version 2025082600, Last Updated ...\nCOM\nORG\nXN--P1AI\n";
        let registry = SuffixRegistry::builder().icann_tlds(text).build();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("com"), Some(SuffixKind::Icann));
        assert_eq!(registry.get("xn--p1ai"), Some(SuffixKind::Icann));
        assert_eq!(registry.get("# Version 2025082600, Last Updated ..."), None);
    }

    #[test]
    fn test_public_suffix_list_sections() {
        let text = "\
// ===BEGIN ICANN DOMAINS===
com
co.uk
*.kawasaki.jp
!city.kawasaki.jp
// ===END ICANN DOMAINS===
// ===BEGIN PRIVATE DOMAINS===
duckdns.org
// ===END PRIVATE DOMAINS===
";
        let registry = SuffixRegistry::builder().public_suffix_list(text).build();
        assert_eq!(registry.get("com"), Some(SuffixKind::Icann));
        assert_eq!(registry.get("co.uk"), Some(SuffixKind::Icann));
        assert_eq!(registry.get("kawasaki.jp"), Some(SuffixKind::Icann));
        assert_eq!(registry.get("duckdns.org"), Some(SuffixKind::Private));
        assert_eq!(registry.get("!city.kawasaki.jp"), None);
        assert_eq!(registry.get("city.kawasaki.jp"), None);
    }

    #[test]
    fn test_rows_before_first_marker_skipped() {
        let text = "stray.example\n// ===BEGIN ICANN DOMAINS===\ncom\n";
        let registry = SuffixRegistry::builder().public_suffix_list(text).build();
        assert_eq!(registry.get("stray.example"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_custom_format() {
        let text = "# local overrides\n// also a comment\ninternal\ncorp.lan\n";
        let registry = SuffixRegistry::builder().custom_suffixes(text).build();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("internal"), Some(SuffixKind::Custom));
        assert_eq!(registry.get("corp.lan"), Some(SuffixKind::Custom));
    }

    #[test]
    fn test_later_loader_overwrites() {
        let registry = SuffixRegistry::builder()
            .icann_tlds("ORG\n")
            .custom_suffixes("org\n")
            .build();
        assert_eq!(registry.get("org"), Some(SuffixKind::Custom));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let registry = SuffixRegistry::builder().build();
        assert!(registry.is_empty());
        assert_eq!(registry.get("com"), None);
    }
}
