//! Error types for the progress engine.

use hifz_catalog::CatalogError;
use thiserror::Error;

/// Errors from engine operations.
///
/// None of these are transient: each points at a bad argument or bad
/// reference data and is returned to the immediate caller as is.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum HifzError {
    /// Chapter id outside the catalog.
    #[error("invalid chapter id: {0}")]
    InvalidChapterId(u8),
    /// Verse outside `1..=verse_count` for the chapter.
    #[error("invalid verse {verse} for chapter {chapter}")]
    InvalidVerseNumber { chapter: u8, verse: u16 },
    /// Page index disagrees with the chapter table.
    #[error("malformed page index at page {page}: {reason}")]
    MalformedIndex { page: u16, reason: &'static str },
    /// Daily target must be a finite, positive page count.
    #[error("invalid daily target: {0} pages")]
    InvalidDailyTarget(f64),
    /// Text that does not parse as `chapter:verse`.
    #[error("invalid position {0:?}, expected chapter:verse")]
    InvalidPosition(String),
    /// Any other catalog failure.
    #[error("catalog error: {0}")]
    Catalog(CatalogError),
}

impl From<CatalogError> for HifzError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::InvalidChapterId(id) => Self::InvalidChapterId(id),
            CatalogError::MalformedIndex { page, reason } => Self::MalformedIndex { page, reason },
            other => Self::Catalog(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_lift_into_taxonomy() {
        assert_eq!(
            HifzError::from(CatalogError::InvalidChapterId(200)),
            HifzError::InvalidChapterId(200)
        );
        assert_eq!(
            HifzError::from(CatalogError::MalformedIndex { page: 3, reason: "x" }),
            HifzError::MalformedIndex { page: 3, reason: "x" }
        );
        assert_eq!(
            HifzError::from(CatalogError::InvalidPage(700)),
            HifzError::Catalog(CatalogError::InvalidPage(700))
        );
    }

    #[test]
    fn messages() {
        let e = HifzError::InvalidVerseNumber { chapter: 1, verse: 8 };
        assert_eq!(e.to_string(), "invalid verse 8 for chapter 1");
        assert_eq!(
            HifzError::InvalidDailyTarget(0.0).to_string(),
            "invalid daily target: 0 pages"
        );
    }
}
