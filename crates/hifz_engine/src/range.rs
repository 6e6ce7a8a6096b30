//! Page range resolution for chapters.
//!
//! A chapter nominally runs up to the page on which the next chapter opens,
//! since that page may still carry its tail. When the next chapter opens at
//! the top of a fresh page, that nominal end page holds nothing of this
//! chapter and the end is walked back until the index lists it again.

use std::ops::RangeInclusive;

use hifz_catalog::Catalog;
use serde::{Deserialize, Serialize};

use crate::error::HifzError;

/// Inclusive, contiguous run of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRange {
    pub first: u16,
    pub last: u16,
}

impl PageRange {
    pub const fn contains(&self, page: u16) -> bool {
        page >= self.first && page <= self.last
    }

    /// Number of pages (always >= 1 for ranges produced by [`pages_of`]).
    /// A range with `last < first` holds none.
    pub const fn len(&self) -> u16 {
        if self.is_empty() {
            0
        } else {
            self.last - self.first + 1
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.last < self.first
    }

    pub fn iter(&self) -> RangeInclusive<u16> {
        self.first..=self.last
    }
}

impl IntoIterator for PageRange {
    type Item = u16;
    type IntoIter = RangeInclusive<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.first..=self.last
    }
}

/// Pages occupied by `chapter`, in order.
pub fn pages_of(catalog: &Catalog, chapter: u8) -> Result<PageRange, HifzError> {
    let ch = catalog.chapter(chapter)?;
    let nominal_end = match catalog.next_chapter(chapter)? {
        Some(next) => next.first_page,
        None => catalog.page_count(),
    };
    let mut end = nominal_end.max(ch.first_page);
    while end > ch.first_page && !catalog.page(end)?.contains_chapter(chapter) {
        end -= 1;
    }
    if end != nominal_end {
        log::debug!("chapter {chapter}: end page {nominal_end} holds none of it, using {end}");
    }
    Ok(PageRange {
        first: ch.first_page,
        last: end,
    })
}
