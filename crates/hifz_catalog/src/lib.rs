//! Reference catalog for the 604-page mushaf.
//!
//! This crate provides:
//! - The bundled chapter table and page-start table of the Madani layout
//! - [`Catalog`]: the validated chapter list plus the per-page content index
//! - Division (juz) conversions, including the reversed numbering used by
//!   students who memorize from the last chapter backwards
//!
//! The catalog is immutable. [`Catalog::standard`] builds the bundled layout
//! once per process; [`Catalog::new`] accepts any other layout that satisfies
//! the same invariants.

pub mod catalog;
pub mod chapter;
pub mod data;
pub mod division;
pub mod error;
pub mod page;

pub use catalog::Catalog;
pub use chapter::{Chapter, VerseRange};
pub use division::{
    DIVISION_COUNT, MUSHAF_PAGES, PAGES_PER_DIVISION, division_pages, reverse_division,
    reversed_division_of_page, reversed_division_pages, standard_division,
    standard_division_of_page,
};
pub use error::CatalogError;
pub use page::{ChapterSpan, PageContent};
