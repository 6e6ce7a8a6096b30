//! Per-page content index entries.

use serde::{Deserialize, Serialize};

use crate::chapter::VerseRange;

/// The verses of one chapter printed on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSpan {
    pub chapter: u8,
    #[serde(flatten)]
    pub verses: VerseRange,
}

/// Everything printed on one page, ordered by chapter id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// 1-based page number.
    pub page: u16,
    /// One span per chapter present on the page, ascending chapter id.
    pub chapters: Vec<ChapterSpan>,
}

impl PageContent {
    /// Verse range of `chapter` on this page, if the chapter appears here.
    pub fn range_of(&self, chapter: u8) -> Option<VerseRange> {
        self.chapters
            .iter()
            .find(|s| s.chapter == chapter)
            .map(|s| s.verses)
    }

    pub fn contains_chapter(&self, chapter: u8) -> bool {
        self.chapters.iter().any(|s| s.chapter == chapter)
    }

    /// Total number of verses printed on the page.
    pub fn total_verses(&self) -> u32 {
        self.chapters.iter().map(|s| u32::from(s.verses.len())).sum()
    }

    /// Verses of chapters with a smaller id than `chapter` on this page.
    pub fn verses_before_chapter(&self, chapter: u8) -> u32 {
        self.chapters
            .iter()
            .filter(|s| s.chapter < chapter)
            .map(|s| u32::from(s.verses.len()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_page() -> PageContent {
        PageContent {
            page: 604,
            chapters: vec![
                ChapterSpan { chapter: 112, verses: VerseRange::new(1, 4) },
                ChapterSpan { chapter: 113, verses: VerseRange::new(1, 5) },
                ChapterSpan { chapter: 114, verses: VerseRange::new(1, 6) },
            ],
        }
    }

    #[test]
    fn totals() {
        let p = last_page();
        assert_eq!(p.total_verses(), 15);
        assert_eq!(p.verses_before_chapter(112), 0);
        assert_eq!(p.verses_before_chapter(113), 4);
        assert_eq!(p.verses_before_chapter(114), 9);
    }

    #[test]
    fn range_lookup() {
        let p = last_page();
        assert_eq!(p.range_of(113), Some(VerseRange::new(1, 5)));
        assert_eq!(p.range_of(111), None);
        assert!(p.contains_chapter(114));
        assert!(!p.contains_chapter(1));
    }

    #[test]
    fn span_json_is_flat() {
        let span = ChapterSpan { chapter: 2, verses: VerseRange::new(6, 16) };
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"chapter":2,"first":6,"last":16}"#);
        let back: ChapterSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }
}
