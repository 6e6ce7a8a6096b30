//! Division (juz) numbering over the 604-page layout.
//!
//! The text is conventionally split into 30 divisions of 20 pages each.
//! Division 1 also carries the opening page, so it spans pages 1-21; every
//! later division `n` spans pages `20(n-1)+2 ..= 20n+1`, and division 30
//! absorbs the remaining tail up to page 604.
//!
//! Students memorizing from the last chapter backwards count divisions in
//! the opposite direction: their first division is standard division 30.
//! [`reverse_division`] is the single place that conversion happens.

use std::ops::RangeInclusive;

use crate::error::CatalogError;

/// Pages per division in the standard layout.
pub const PAGES_PER_DIVISION: u16 = 20;

/// Number of divisions.
pub const DIVISION_COUNT: u8 = 30;

/// Page count of the standard layout.
pub const MUSHAF_PAGES: u16 = 604;

fn check_division(division: u8) -> Result<u8, CatalogError> {
    if (1..=DIVISION_COUNT).contains(&division) {
        Ok(division)
    } else {
        Err(CatalogError::InvalidDivision(division))
    }
}

/// Standard division (1..=30) containing `page`.
pub fn standard_division_of_page(page: u16) -> Result<u8, CatalogError> {
    if page == 0 || page > MUSHAF_PAGES {
        return Err(CatalogError::InvalidPage(page));
    }
    if page <= PAGES_PER_DIVISION + 1 {
        return Ok(1);
    }
    let division = (page - 2) / PAGES_PER_DIVISION + 1;
    Ok((division as u8).min(DIVISION_COUNT))
}

/// Convert a standard division number into the reversed numbering.
///
/// `reversed = 31 - standard`. The mapping is its own inverse.
pub fn reverse_division(standard: u8) -> Result<u8, CatalogError> {
    Ok(DIVISION_COUNT + 1 - check_division(standard)?)
}

/// Convert a reversed division number back into the standard numbering.
pub fn standard_division(reversed: u8) -> Result<u8, CatalogError> {
    reverse_division(reversed)
}

/// Pages covered by a standard division.
pub fn division_pages(standard: u8) -> Result<RangeInclusive<u16>, CatalogError> {
    let n = u16::from(check_division(standard)?);
    let start = if n == 1 {
        1
    } else {
        PAGES_PER_DIVISION * (n - 1) + 2
    };
    let end = if n == u16::from(DIVISION_COUNT) {
        MUSHAF_PAGES
    } else {
        PAGES_PER_DIVISION * n + 1
    };
    Ok(start..=end)
}

/// Pages covered by a division in the reversed numbering.
pub fn reversed_division_pages(reversed: u8) -> Result<RangeInclusive<u16>, CatalogError> {
    division_pages(standard_division(reversed)?)
}

/// Reversed division (1..=30) containing `page`.
pub fn reversed_division_of_page(page: u16) -> Result<u8, CatalogError> {
    reverse_division(standard_division_of_page(page)?)
}
