//! Protected path prefixes.
//!
//! A prefix `p` protects `p` itself and everything below `p/`. The boundary
//! is exact: `/app` protects `/app/settings` but not `/apple`.

#[cfg(test)]
#[path = "prefix_test.rs"]
mod prefix_test;

use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_PROTECTED_PREFIX: &str = "/app";

/// Ordered, deduplicated set of protected prefixes. Immutable once built;
/// clones share the same backing storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectedPrefixSet {
    prefixes: Arc<[String]>,
}

impl ProtectedPrefixSet {
    /// Build a set from raw prefixes.
    ///
    /// Each entry is trimmed and stripped of trailing `/`. Entries that end up
    /// empty or do not start with `/` are dropped, as are duplicates.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut prefixes: Vec<String> = Vec::new();
        for entry in raw {
            let Some(prefix) = normalize_prefix(entry.as_ref()) else {
                tracing::warn!(prefix = entry.as_ref(), "ignoring unusable protected prefix");
                continue;
            };
            if !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }
        Self { prefixes: prefixes.into() }
    }

    /// Return the first prefix protecting `path`, if any.
    #[must_use]
    pub fn matching(&self, path: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| prefix_covers(prefix, path))
    }

    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        self.matching(path).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}

impl Default for ProtectedPrefixSet {
    fn default() -> Self {
        Self::new([DEFAULT_PROTECTED_PREFIX])
    }
}

/// Parses a comma-separated list such as `"/app, /admin"`.
impl FromStr for ProtectedPrefixSet {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(raw.split(',').filter(|s| !s.trim().is_empty())))
    }
}

fn normalize_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || !trimmed.starts_with('/') {
        return None;
    }
    Some(trimmed.to_owned())
}

fn prefix_covers(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
