//! Progress as a count of divisions, and the chapter pointer.
//!
//! Students memorize from the last chapter towards the first. Every chapter
//! after the current one is therefore finished, and the current chapter is
//! finished up to the last page of its most recent session. Divisions are
//! derived from that on every call and never stored.

use hifz_catalog::{Catalog, DIVISION_COUNT, PAGES_PER_DIVISION};
use serde::{Deserialize, Serialize};

use crate::error::HifzError;
use crate::propose::{Proposal, check_daily_target, propose_next};
use crate::session::{SessionRecord, latest_for_chapter};

/// Daily target used when none is configured, in pages.
pub const DEFAULT_DAILY_TARGET_PAGES: f64 = 1.0;

/// Persisted division number of a manually flagged completion.
pub const RECORDED_COMPLETE: f64 = 31.0;

/// Highest persisted number of a count that is not complete. Legacy readers
/// treat 30 and above as complete.
pub const RECORDED_IN_PROGRESS_MAX: f64 = 29.9;

fn recorded_is_complete(recorded: f64) -> bool {
    recorded >= f64::from(DIVISION_COUNT)
}

/// Divisions memorized so far.
///
/// `complete` is the only completion signal; the legacy persisted numbers
/// (30 for a computed full count, 31 for a manual flag) are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionCount {
    /// Pages counted as memorized.
    pub completed_pages: u16,
    /// Memorization flagged as complete.
    pub complete: bool,
}

impl DivisionCount {
    pub const fn in_progress(completed_pages: u16) -> Self {
        Self {
            completed_pages,
            complete: false,
        }
    }

    /// Divisions, in `0.0..=30.0`.
    pub fn value(&self) -> f64 {
        let max = f64::from(DIVISION_COUNT);
        if self.complete {
            max
        } else {
            (f64::from(self.completed_pages) / f64::from(PAGES_PER_DIVISION)).min(max)
        }
    }

    /// [`value`](Self::value) to one decimal place.
    pub fn rounded(&self) -> f64 {
        (self.value() * 10.0).round() / 10.0
    }

    /// Number to persist for legacy consumers.
    ///
    /// A count that is not complete never reaches 30, so reading it back
    /// with [`from_recorded`](Self::from_recorded) keeps `complete` as is.
    pub fn recorded(&self) -> f64 {
        if self.complete {
            RECORDED_COMPLETE
        } else {
            self.rounded().min(RECORDED_IN_PROGRESS_MAX)
        }
    }

    /// Read a persisted number for a layout of `page_count` pages. Either
    /// legacy threshold (30 or 31) means complete.
    pub fn from_recorded(recorded: f64, page_count: u16) -> Self {
        if recorded_is_complete(recorded) {
            return Self {
                completed_pages: page_count,
                complete: true,
            };
        }
        let pages = (recorded.max(0.0) * f64::from(PAGES_PER_DIVISION)).round();
        Self::in_progress((pages as u16).min(page_count))
    }
}

/// Divisions memorized by a student currently on `current_chapter`.
///
/// With `override_complete` set the count is complete regardless of the
/// other inputs.
pub fn compute_divisions(
    catalog: &Catalog,
    current_chapter: u8,
    history: &[SessionRecord],
    override_complete: bool,
) -> Result<DivisionCount, HifzError> {
    if override_complete {
        return Ok(DivisionCount {
            completed_pages: catalog.page_count(),
            complete: true,
        });
    }

    let chapter = catalog.chapter(current_chapter)?;
    let next = catalog.next_chapter(current_chapter)?;
    let completed = match next {
        Some(next) => catalog.page_count().saturating_sub(next.first_page) + 1,
        None => 0,
    };

    let current = match latest_for_chapter(history, chapter).and_then(|r| r.to_page) {
        Some(to_page) => {
            if to_page < chapter.first_page || to_page > catalog.page_count() {
                log::warn!(
                    "chapter {current_chapter}: last session ends on page {to_page}, outside {}..={}",
                    chapter.first_page,
                    catalog.page_count()
                );
            }
            // The page the next chapter opens on is already in `completed`.
            let last_own = match next {
                Some(next) => next.first_page.saturating_sub(1),
                None => catalog.page_count(),
            };
            (to_page.min(last_own) + 1).saturating_sub(chapter.first_page)
        }
        None => 0,
    };

    Ok(DivisionCount::in_progress(completed + current))
}

/// Outcome of moving the chapter pointer past a finished chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterAdvance {
    /// Chapter to work on next.
    pub next: u8,
    /// The pointer went past the start and restarted from the last chapter.
    pub wrapped: bool,
}

/// Chapter to move to once `current` is finished.
///
/// The pointer moves one chapter towards the start. From chapter 2 or 1 it
/// restarts at the last chapter; that wrap does not mark anything complete,
/// it is only reported.
pub fn advance_chapter(catalog: &Catalog, current: u8) -> Result<ChapterAdvance, HifzError> {
    catalog.chapter(current)?;
    if current <= 2 {
        let next = catalog.chapter_count();
        log::warn!("chapter pointer wrapped from {current} to {next}; completion is not flagged");
        return Ok(ChapterAdvance {
            next,
            wrapped: true,
        });
    }
    Ok(ChapterAdvance {
        next: current - 1,
        wrapped: false,
    })
}

fn default_daily_target() -> f64 {
    DEFAULT_DAILY_TARGET_PAGES
}

/// Authoritative per-student state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPointer {
    pub current_chapter: u8,
    /// Manually flagged completion.
    #[serde(default)]
    pub complete: bool,
    #[serde(default = "default_daily_target")]
    pub daily_target_pages: f64,
}

impl Default for ProgressPointer {
    fn default() -> Self {
        Self::new(114)
    }
}

impl ProgressPointer {
    pub fn new(current_chapter: u8) -> Self {
        Self {
            current_chapter,
            complete: false,
            daily_target_pages: DEFAULT_DAILY_TARGET_PAGES,
        }
    }

    /// Pointer restored from a legacy persisted division number.
    pub fn from_recorded(current_chapter: u8, recorded_divisions: f64) -> Self {
        Self {
            complete: recorded_is_complete(recorded_divisions),
            ..Self::new(current_chapter)
        }
    }

    pub fn validate(&self, catalog: &Catalog) -> Result<(), HifzError> {
        catalog.chapter(self.current_chapter)?;
        check_daily_target(self.daily_target_pages)
    }

    pub fn divisions(
        &self,
        catalog: &Catalog,
        history: &[SessionRecord],
    ) -> Result<DivisionCount, HifzError> {
        compute_divisions(catalog, self.current_chapter, history, self.complete)
    }

    pub fn propose(
        &self,
        catalog: &Catalog,
        history: &[SessionRecord],
    ) -> Result<Option<Proposal>, HifzError> {
        propose_next(catalog, self.current_chapter, history, self.daily_target_pages)
    }

    /// Pointer after finishing the current chapter.
    pub fn advanced(&self, catalog: &Catalog) -> Result<Self, HifzError> {
        let advance = advance_chapter(catalog, self.current_chapter)?;
        Ok(Self {
            current_chapter: advance.next,
            ..self.clone()
        })
    }
}
