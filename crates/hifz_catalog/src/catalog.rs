//! The validated chapter table plus per-page content index.
//!
//! A [`Catalog`] is immutable once built. Every constructor runs the same
//! validation, so code holding a `&Catalog` can rely on these invariants:
//!
//! - chapter ids are `1..=n` in order, each with at least one verse
//! - first pages are non-decreasing and within `1..=page_count`
//! - pages are numbered `1..=page_count` in order, each lists at least one
//!   chapter, with chapter ids strictly increasing
//! - each chapter's spans sit on consecutive pages starting at its first
//!   page and cover `1..=verse_count` exactly once

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::chapter::{Chapter, VerseRange};
use crate::data::{CHAPTER_TABLE, PAGE_STARTS};
use crate::error::CatalogError;
use crate::page::{ChapterSpan, PageContent};

/// Chapter table and page content index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData")]
pub struct Catalog {
    chapters: Vec<Chapter>,
    pages: Vec<PageContent>,
}

/// Unvalidated wire shape of a catalog data file.
#[derive(Deserialize)]
struct CatalogData {
    chapters: Vec<Chapter>,
    pages: Vec<PageContent>,
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Self::new(data.chapters, data.pages)
    }
}

static STANDARD: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build a catalog from a chapter table and a page index.
    pub fn new(chapters: Vec<Chapter>, pages: Vec<PageContent>) -> Result<Self, CatalogError> {
        let catalog = Self { chapters, pages };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The bundled 604-page Madani layout, built on first use.
    pub fn standard() -> &'static Catalog {
        STANDARD.get_or_init(|| {
            let chapters = CHAPTER_TABLE
                .iter()
                .enumerate()
                .map(|(i, &(name, arabic_name, verse_count, first_page))| Chapter {
                    id: (i + 1) as u8,
                    name: name.to_string(),
                    arabic_name: arabic_name.to_string(),
                    verse_count,
                    first_page,
                })
                .collect();
            // The bundled tables are covered by the crate's golden tests.
            Self::from_page_starts(chapters, &PAGE_STARTS)
                .expect("bundled mushaf tables are consistent")
        })
    }

    /// Derive the page index from the first verse printed on each page.
    ///
    /// `starts[i]` is the `(chapter, verse)` that opens page `i + 1`. Each
    /// page runs up to (excluding) the next page's start; the last page runs
    /// to the end of the last chapter.
    pub fn from_page_starts(
        chapters: Vec<Chapter>,
        starts: &[(u8, u16)],
    ) -> Result<Self, CatalogError> {
        if chapters.is_empty() {
            return Err(CatalogError::InvalidChapter {
                chapter: 0,
                reason: "catalog has no chapters",
            });
        }
        if chapters.len() > u8::MAX as usize {
            return Err(CatalogError::InvalidChapter {
                chapter: u8::MAX,
                reason: "too many chapters",
            });
        }
        if starts.first() != Some(&(1, 1)) {
            return Err(CatalogError::MalformedIndex {
                page: 1,
                reason: "first page must open with chapter 1 verse 1",
            });
        }
        for (i, &(chapter, verse)) in starts.iter().enumerate() {
            let page = (i + 1) as u16;
            let ch = chapter
                .checked_sub(1)
                .and_then(|idx| chapters.get(idx as usize))
                .ok_or(CatalogError::MalformedIndex {
                    page,
                    reason: "page start names an unknown chapter",
                })?;
            if !ch.has_verse(verse) {
                return Err(CatalogError::MalformedIndex {
                    page,
                    reason: "page start names a verse outside its chapter",
                });
            }
            if i > 0 && starts[i - 1] >= (chapter, verse) {
                return Err(CatalogError::MalformedIndex {
                    page,
                    reason: "page starts must be strictly increasing",
                });
            }
        }

        let last_chapter = chapters.len() as u8;
        let mut pages = Vec::with_capacity(starts.len());
        for (i, &(chapter, verse)) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied();
            let mut spans = Vec::new();
            let (mut c, mut v) = (chapter, verse);
            loop {
                match end {
                    Some((end_chapter, end_verse)) if end_chapter == c => {
                        if end_verse > v {
                            spans.push(ChapterSpan {
                                chapter: c,
                                verses: VerseRange::new(v, end_verse - 1),
                            });
                        }
                        break;
                    }
                    _ => spans.push(ChapterSpan {
                        chapter: c,
                        verses: VerseRange::new(v, chapters[c as usize - 1].verse_count),
                    }),
                }
                if c == last_chapter {
                    break;
                }
                c += 1;
                v = 1;
            }
            pages.push(PageContent {
                page: (i + 1) as u16,
                chapters: spans,
            });
        }

        Self::new(chapters, pages)
    }

    /// Parse and validate a catalog from a JSON data file.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the catalog into the JSON data-file shape.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn pages(&self) -> &[PageContent] {
        &self.pages
    }

    /// Number of chapters (114 for the bundled layout).
    pub fn chapter_count(&self) -> u8 {
        self.chapters.len() as u8
    }

    /// Number of pages (604 for the bundled layout).
    pub fn page_count(&self) -> u16 {
        self.pages.len() as u16
    }

    /// Chapter by 1-based id.
    pub fn chapter(&self, id: u8) -> Result<&Chapter, CatalogError> {
        id.checked_sub(1)
            .and_then(|idx| self.chapters.get(idx as usize))
            .ok_or(CatalogError::InvalidChapterId(id))
    }

    /// Chapter following `id` in recitation order, `None` for the last one.
    pub fn next_chapter(&self, id: u8) -> Result<Option<&Chapter>, CatalogError> {
        self.chapter(id)?;
        Ok(self.chapters.get(id as usize))
    }

    /// Chapter by transliterated or Arabic name.
    pub fn chapter_by_name(&self, name: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.matches_name(name))
    }

    /// Page content by 1-based page number.
    pub fn page(&self, page: u16) -> Result<&PageContent, CatalogError> {
        page.checked_sub(1)
            .and_then(|idx| self.pages.get(idx as usize))
            .ok_or(CatalogError::InvalidPage(page))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.chapters.is_empty() {
            return Err(CatalogError::InvalidChapter {
                chapter: 0,
                reason: "catalog has no chapters",
            });
        }
        if self.chapters.len() > u8::MAX as usize {
            return Err(CatalogError::InvalidChapter {
                chapter: u8::MAX,
                reason: "too many chapters",
            });
        }
        if self.pages.is_empty() || self.pages.len() > u16::MAX as usize {
            return Err(CatalogError::MalformedIndex {
                page: 0,
                reason: "page count out of range",
            });
        }
        let page_count = self.pages.len() as u16;

        let mut prev_first_page = 1;
        for (i, ch) in self.chapters.iter().enumerate() {
            let invalid = |reason| CatalogError::InvalidChapter {
                chapter: ch.id,
                reason,
            };
            if ch.id as usize != i + 1 {
                return Err(invalid("chapter ids must be 1..=n in order"));
            }
            if ch.verse_count == 0 {
                return Err(invalid("chapter has no verses"));
            }
            if ch.first_page == 0 || ch.first_page > page_count {
                return Err(invalid("first page outside the text"));
            }
            if ch.first_page < prev_first_page {
                return Err(invalid("first pages must be non-decreasing"));
            }
            prev_first_page = ch.first_page;
        }

        // Per chapter: next verse expected, page of the previous span.
        let mut cursor: Vec<(u16, u16)> = vec![(1, 0); self.chapters.len()];
        for (i, content) in self.pages.iter().enumerate() {
            let page = content.page;
            let malformed = |reason| CatalogError::MalformedIndex { page, reason };
            if page as usize != i + 1 {
                return Err(malformed("pages must be numbered 1..=n in order"));
            }
            if content.chapters.is_empty() {
                return Err(malformed("page lists no chapter"));
            }
            let mut prev_chapter = 0;
            for span in &content.chapters {
                if span.chapter <= prev_chapter {
                    return Err(malformed("chapters on a page must be strictly increasing"));
                }
                prev_chapter = span.chapter;
                let ch = self
                    .chapter(span.chapter)
                    .map_err(|_| malformed("page lists an unknown chapter"))?;
                if span.verses.is_empty() || span.verses.first == 0 {
                    return Err(malformed("page lists an empty verse range"));
                }
                if span.verses.last > ch.verse_count {
                    return Err(malformed("verse range runs past the end of its chapter"));
                }
                let (next_verse, prev_page) = &mut cursor[span.chapter as usize - 1];
                if *next_verse == 1 {
                    if page != ch.first_page {
                        return Err(malformed("chapter opens on a page other than its first page"));
                    }
                } else if page != *prev_page + 1 {
                    return Err(malformed("chapter spans are not on consecutive pages"));
                }
                if span.verses.first != *next_verse {
                    return Err(malformed("verse ranges of a chapter are not contiguous"));
                }
                *next_verse = span.verses.last + 1;
                *prev_page = page;
            }
        }

        for (ch, &(next_verse, _)) in self.chapters.iter().zip(&cursor) {
            if next_verse != ch.verse_count + 1 {
                return Err(CatalogError::InvalidChapter {
                    chapter: ch.id,
                    reason: "page index does not cover every verse",
                });
            }
        }

        log::debug!(
            "catalog validated: {} chapters, {} pages",
            self.chapters.len(),
            page_count
        );
        Ok(())
    }
}
