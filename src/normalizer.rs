//! Authority extraction.
//!
//! Reduces a raw URL-like string to its authority (`host[:port]`) plus an
//! optional path by stripping, strictly in order: fragment, query, scheme,
//! path, and userinfo. The order matters: a `?` inside a fragment must
//! not be treated as a query start, and a scheme must be gone before the
//! first `/` can mean "path".
//!
//! This stage never fails; garbage input yields an empty authority that
//! later stages reject.

/// Split a raw string into `(authority, path)`.
///
/// The path is `None` when the input has no `/` after the authority or
/// when `keep_path` is off; when present it carries no trailing slash.
pub(crate) fn split_authority(raw: &str, keep_path: bool) -> (&str, Option<&str>) {
    let mut rest = raw;

    // fragment, then query; an index of 0 means there is no authority in
    // front worth keeping, so leave the string alone for later rejection
    if let Some(idx) = rest.find('#') {
        if idx > 0 {
            rest = &rest[..idx];
        }
    }
    if let Some(idx) = rest.find('?') {
        if idx > 0 {
            rest = &rest[..idx];
        }
    }

    // scheme separator, only when the remainder is long enough to hold one
    if rest.len() > 8 {
        if let Some(idx) = rest.find("://") {
            rest = &rest[idx + 3..];
        }
    }

    // first "/" starts the path
    let mut path = None;
    if let Some(idx) = rest.find('/') {
        if keep_path {
            path = Some(rest[idx + 1..].trim_end_matches('/'));
        }
        rest = &rest[..idx];
    }

    // userinfo ends at the last "@"
    if let Some(idx) = rest.rfind('@') {
        rest = &rest[idx + 1..];
    }

    (rest.trim(), path)
}
