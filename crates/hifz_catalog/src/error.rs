//! Error types for catalog construction and lookup.

use thiserror::Error;

/// Errors from catalog validation, lookup, or data-file parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Chapter id outside `1..=chapter_count`.
    #[error("invalid chapter id: {0}")]
    InvalidChapterId(u8),
    /// Page number outside `1..=page_count`.
    #[error("invalid page: {0}")]
    InvalidPage(u16),
    /// Division number outside `1..=30`.
    #[error("invalid division: {0}")]
    InvalidDivision(u8),
    /// A chapter row violates the chapter-table invariants.
    #[error("invalid chapter {chapter}: {reason}")]
    InvalidChapter { chapter: u8, reason: &'static str },
    /// A page entry is inconsistent with the chapter table.
    #[error("malformed page index at page {page}: {reason}")]
    MalformedIndex { page: u16, reason: &'static str },
    /// Catalog data file could not be parsed or written.
    #[error("catalog data error: {0}")]
    Data(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
