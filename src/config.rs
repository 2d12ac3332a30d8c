//! Parse-time configuration.
//!
//! A [`ParseConfig`] is an immutable value constructed once and shared by
//! reference across parse calls. Restrictions on the accepted host form are
//! a single [`Restrict`] enum rather than three booleans, so at most one
//! can ever be active.

/// Restricts which host forms a parse accepts, and what the host field
/// holds on success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Restrict {
    /// Accept both IP literals and domain names.
    #[default]
    None,
    /// Accept only IP literals; domain hosts are rejected.
    IpOnly,
    /// Accept only domain names; IP hosts are rejected.
    HostOnly,
    /// Accept only domains, and overwrite the host with its apex,
    /// discarding port and path.
    ApexOnly,
}

/// Toggles that alter normalization, classification, and resolution.
///
/// ```
/// use apexurl::{ParseConfig, Restrict};
///
/// let config = ParseConfig::new()
///     .keep_path(false)
///     .restrict(Restrict::HostOnly);
/// assert!(config.strip_www);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    /// Strip a leading "www." label unless it sits directly atop the
    /// suffix boundary (default: on).
    pub strip_www: bool,
    /// Transcode non-ASCII hosts to their punycode form (default: on).
    pub allow_idna: bool,
    /// Capture the path segment (default: on).
    pub keep_path: bool,
    /// Capture the port segment (default: on).
    pub keep_port: bool,
    /// Accept hosts with no matching registry suffix instead of rejecting
    /// them (default: off).
    pub accept_unknown_tld: bool,
    /// Host-form restriction (default: [`Restrict::None`]).
    pub restrict: Restrict,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            strip_www: true,
            allow_idna: true,
            keep_path: true,
            keep_port: true,
            accept_unknown_tld: false,
            restrict: Restrict::None,
        }
    }
}

impl ParseConfig {
    /// Configuration with every toggle at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a leading "www." label is stripped.
    pub fn strip_www(mut self, on: bool) -> Self {
        self.strip_www = on;
        self
    }

    /// Set whether non-ASCII hosts are transcoded to punycode.
    pub fn allow_idna(mut self, on: bool) -> Self {
        self.allow_idna = on;
        self
    }

    /// Set whether the path segment is captured.
    pub fn keep_path(mut self, on: bool) -> Self {
        self.keep_path = on;
        self
    }

    /// Set whether the port segment is captured.
    pub fn keep_port(mut self, on: bool) -> Self {
        self.keep_port = on;
        self
    }

    /// Set whether hosts with no matching suffix are accepted.
    pub fn accept_unknown_tld(mut self, on: bool) -> Self {
        self.accept_unknown_tld = on;
        self
    }

    /// Set the host-form restriction. Setting a new restriction replaces
    /// the previous one entirely.
    pub fn restrict(mut self, restrict: Restrict) -> Self {
        self.restrict = restrict;
        self
    }
}
