//! Chapter descriptors and verse ranges.

use serde::{Deserialize, Serialize};

/// One chapter of the text, in canonical recitation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// 1-based ordinal (1 = first chapter recited).
    pub id: u8,
    /// Transliterated name.
    pub name: String,
    /// Arabic name. Optional in data files.
    #[serde(default)]
    pub arabic_name: String,
    /// Number of verses (>= 1).
    pub verse_count: u16,
    /// Page on which verse 1 is printed.
    pub first_page: u16,
}

impl Chapter {
    /// Whether `name` refers to this chapter.
    ///
    /// Matches either the transliterated or the Arabic name, ignoring
    /// surrounding whitespace and ASCII case.
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.name.eq_ignore_ascii_case(name)
            || (!self.arabic_name.is_empty() && self.arabic_name == name)
    }

    /// Whether `verse` is a valid verse number for this chapter.
    pub const fn has_verse(&self, verse: u16) -> bool {
        verse >= 1 && verse <= self.verse_count
    }
}

/// Inclusive range of verse numbers within one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRange {
    /// First verse (inclusive).
    pub first: u16,
    /// Last verse (inclusive).
    pub last: u16,
}

impl VerseRange {
    pub const fn new(first: u16, last: u16) -> Self {
        Self { first, last }
    }

    /// Number of verses in the range. Zero for an inverted range.
    pub const fn len(&self) -> u16 {
        if self.last < self.first {
            0
        } else {
            self.last - self.first + 1
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn contains(&self, verse: u16) -> bool {
        verse >= self.first && verse <= self.last
    }
}
