//! Page distances between coordinates.

use hifz_catalog::Catalog;

use crate::error::HifzError;
use crate::position::{Coordinate, Position, locate};

/// Granularity of reported distances, in pages.
pub const DISTANCE_STEP_PAGES: f64 = 0.5;

/// Slack below which float noise in the fractions is not rounded up to the
/// next step.
const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Distance between two coordinates, rounded up to the next half page.
///
/// Distinct positions are never less than half a page apart, even when they
/// share a coordinate value (the end of one verse and the start of the next).
/// Only two coordinates of the same position and offset kind are 0 apart.
pub fn distance(start: &Coordinate, end: &Coordinate) -> f64 {
    let raw = (end.value - start.value).abs();
    let steps = (raw / DISTANCE_STEP_PAGES - ROUNDING_TOLERANCE).ceil().max(0.0);
    let rounded = steps * DISTANCE_STEP_PAGES;
    if rounded == 0.0 && !start.same_point(end) {
        DISTANCE_STEP_PAGES
    } else {
        rounded
    }
}

/// Pages covered by a recitation from `from` through `to`, both inclusive.
pub fn recited_pages(catalog: &Catalog, from: Position, to: Position) -> Result<f64, HifzError> {
    let start = locate(catalog, from, false)?;
    let end = locate(catalog, to, true)?;
    Ok(distance(&start, &end))
}
