//! Next-session proposals.

use hifz_catalog::Catalog;
use serde::{Deserialize, Serialize};

use crate::error::HifzError;
use crate::range::{PageRange, pages_of};
use crate::session::{SessionRecord, latest_for_chapter};

/// Suggested bounds for the next session. Pages and verses are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub chapter: u8,
    pub from_page: u16,
    pub to_page: u16,
    pub from_verse: u16,
    pub to_verse: u16,
}

impl Proposal {
    pub const fn pages(&self) -> PageRange {
        PageRange {
            first: self.from_page,
            last: self.to_page,
        }
    }
}

pub(crate) fn check_daily_target(pages: f64) -> Result<(), HifzError> {
    if pages.is_finite() && pages > 0.0 {
        Ok(())
    } else {
        Err(HifzError::InvalidDailyTarget(pages))
    }
}

/// Propose the next session in `current_chapter`.
///
/// Continues on the page after the most recent session, or at the start of
/// the chapter when it has no session with a last page yet, and spans
/// `ceil(daily_target)` pages without leaving the chapter. Returns `None`
/// once the most recent session reached the chapter's last page: the caller
/// has to advance the chapter pointer first.
pub fn propose_next(
    catalog: &Catalog,
    current_chapter: u8,
    history: &[SessionRecord],
    daily_target: f64,
) -> Result<Option<Proposal>, HifzError> {
    check_daily_target(daily_target)?;
    let chapter = catalog.chapter(current_chapter)?;
    let pages = pages_of(catalog, current_chapter)?;

    let (from_page, from_verse) = match latest_for_chapter(history, chapter).and_then(|r| r.to_page)
    {
        Some(to_page) => {
            let start = to_page.saturating_add(1);
            if !pages.contains(start) {
                log::debug!(
                    "chapter {current_chapter}: last session ended on page {to_page}, nothing left in {}..={}",
                    pages.first,
                    pages.last
                );
                return Ok(None);
            }
            let range = catalog
                .page(start)?
                .range_of(current_chapter)
                .ok_or(HifzError::MalformedIndex {
                    page: start,
                    reason: "page inside chapter range does not list the chapter",
                })?;
            (start, range.first)
        }
        None => (pages.first, 1),
    };

    let span = daily_target.ceil().min(f64::from(pages.len())) as u16;
    let to_page = from_page.saturating_add(span - 1).min(pages.last);
    let to_verse = catalog
        .page(to_page)?
        .range_of(current_chapter)
        .ok_or(HifzError::MalformedIndex {
            page: to_page,
            reason: "page inside chapter range does not list the chapter",
        })?
        .last;

    let proposal = Proposal {
        chapter: current_chapter,
        from_page,
        to_page,
        from_verse,
        to_verse,
    };
    log::debug!("proposal: {proposal:?}");
    Ok(Some(proposal))
}
