//! Memorization progress engine for students who learn the text from the
//! last chapter backwards.
//!
//! Every operation is a pure function over a read-only [`Catalog`] and
//! caller-supplied session history:
//! - [`pages_of`]: pages occupied by a chapter
//! - [`locate`]: real-valued page coordinate of a verse
//! - [`distance`]: half-page-rounded distance between two coordinates
//! - [`compute_divisions`]: completed pages as a reversed division count
//! - [`propose_next`]: next session's page and verse bounds
//!
//! Pass [`Catalog::standard()`] for the bundled 604-page layout, or any
//! validated [`Catalog`] for synthetic fixtures.

pub mod distance;
pub mod error;
pub mod position;
pub mod progress;
pub mod propose;
pub mod range;
pub mod session;

#[cfg(test)]
mod testutil;

pub use distance::{DISTANCE_STEP_PAGES, distance, recited_pages};
pub use error::HifzError;
pub use position::{Coordinate, Position, locate};
pub use progress::{
    ChapterAdvance, DEFAULT_DAILY_TARGET_PAGES, DivisionCount, ProgressPointer, RECORDED_COMPLETE,
    RECORDED_IN_PROGRESS_MAX, advance_chapter, compute_divisions,
};
pub use propose::{Proposal, propose_next};
pub use range::{PageRange, pages_of};
pub use session::{SessionRecord, latest_for_chapter};

// Re-export the catalog so callers need only this crate.
pub use hifz_catalog::{Catalog, CatalogError, Chapter, PageContent, VerseRange};
