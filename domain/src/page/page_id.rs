//! Page identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension used both by the remote site and by the local page cache.
pub const PAGE_EXTENSION: &str = "htm";

/// URL slug uniquely naming a scraped document (Value Object)
///
/// A slug maps deterministically to a fetch URL (`<base>/<slug>.htm`)
/// and to a cache file name (`<slug>.htm`), so it never contains path
/// separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageId(String);

impl PageId {
    /// Try to create a page identifier from a slug
    pub fn new(slug: impl Into<String>) -> Result<Self, DomainError> {
        let slug = slug.into();
        let trimmed = slug.trim();
        if trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || trimmed.contains(['/', '\\'])
        {
            return Err(DomainError::InvalidPageId(slug));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Derive a page identifier from a table-of-contents link.
    ///
    /// Query strings and fragments are dropped, only the last path segment
    /// is kept, and the file extension is stripped:
    /// `Nouns.htm` → `Nouns`, `/Parts-of-Speech.htm#top` → `Parts-of-Speech`.
    pub fn from_href(href: &str) -> Result<Self, DomainError> {
        let path = href.split(['#', '?']).next().unwrap_or_default();
        let segment = path.rsplit('/').next().unwrap_or_default();
        let stem = match segment.rsplit_once('.') {
            Some((stem, _ext)) => stem,
            None => segment,
        };
        Self::new(stem).map_err(|_| DomainError::InvalidPageId(href.to_string()))
    }

    /// The slug itself
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name under which the raw page body is cached
    pub fn cache_file_name(&self) -> String {
        format!("{}.{}", self.0, PAGE_EXTENSION)
    }

    /// Canonical URL of the page on the given site
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}.{}",
            base_url.trim_end_matches('/'),
            self.0,
            PAGE_EXTENSION
        )
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PageId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageId> for String {
    fn from(id: PageId) -> Self {
        id.0
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
