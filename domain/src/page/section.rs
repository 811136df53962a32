//! Table-of-contents sections

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level grouping of pages in the grammar book's table of contents.
///
/// Sections are numbered the way the contents page numbers its tabs:
/// `#tocTab<n>` holds the display name and `#toc<n>` holds the links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Section {
    Grammar,
    Punctuation,
    SpellingAndPronunciation,
}

impl Section {
    /// All sections in canonical (table-of-contents) order
    pub const ALL: [Section; 3] = [
        Section::Grammar,
        Section::Punctuation,
        Section::SpellingAndPronunciation,
    ];

    /// One-based section number as used on the command line
    pub fn number(self) -> u8 {
        match self {
            Section::Grammar => 1,
            Section::Punctuation => 2,
            Section::SpellingAndPronunciation => 3,
        }
    }

    /// CSS selector of the element holding this section's links
    pub fn contents_selector(self) -> String {
        format!("#toc{}", self.number())
    }

    /// CSS selector of the tab holding this section's display name
    pub fn tab_selector(self) -> String {
        format!("#tocTab{}", self.number())
    }

    /// Human-readable name, used when the contents page is not at hand
    pub fn default_title(self) -> &'static str {
        match self {
            Section::Grammar => "Grammar",
            Section::Punctuation => "Punctuation",
            Section::SpellingAndPronunciation => "Spelling and Pronunciation",
        }
    }
}

impl TryFrom<u8> for Section {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Section::Grammar),
            2 => Ok(Section::Punctuation),
            3 => Ok(Section::SpellingAndPronunciation),
            other => Err(DomainError::UnknownSection(other)),
        }
    }
}

impl From<Section> for u8 {
    fn from(section: Section) -> Self {
        section.number()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.default_title(), self.number())
    }
}

/// Turn a section tab's text into a file-name friendly stem:
/// surrounding whitespace trimmed, inner spaces replaced by `_`.
pub fn section_file_stem(title: &str) -> String {
    title.trim().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_numbers_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::try_from(section.number()), Ok(section));
        }
    }

    #[test]
    fn test_section_unknown_number() {
        assert_eq!(Section::try_from(0), Err(DomainError::UnknownSection(0)));
        assert_eq!(Section::try_from(4), Err(DomainError::UnknownSection(4)));
    }

    #[test]
    fn test_section_selectors() {
        assert_eq!(Section::Punctuation.contents_selector(), "#toc2");
        assert_eq!(Section::SpellingAndPronunciation.tab_selector(), "#tocTab3");
    }

    #[test]
    fn test_canonical_order() {
        let numbers: Vec<u8> = Section::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_section_file_stem() {
        assert_eq!(
            section_file_stem("  Spelling and Pronunciation\n"),
            "Spelling_and_Pronunciation"
        );
        assert_eq!(section_file_stem("Grammar"), "Grammar");
    }
}
