//! Verse positions and their page coordinates.
//!
//! A coordinate is `page + fraction`, where the fraction is the share of the
//! page's verses that precede the position. Every verse on a page counts as
//! one unit regardless of its printed length. Coordinates increase strictly
//! in recitation order across the whole text.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use hifz_catalog::Catalog;
use serde::{Deserialize, Serialize};

use crate::error::HifzError;
use crate::range::pages_of;

/// A `(chapter, verse)` reference. Orders in recitation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub chapter: u8,
    pub verse: u16,
}

impl Position {
    pub const fn new(chapter: u8, verse: u16) -> Self {
        Self { chapter, verse }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl FromStr for Position {
    type Err = HifzError;

    /// Parse `"chapter:verse"`, e.g. `"2:255"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HifzError::InvalidPosition(s.to_string());
        let (chapter, verse) = s.trim().split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            chapter: chapter.trim().parse().map_err(|_| invalid())?,
            verse: verse.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Page coordinate of a position, remembering where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// `page + fraction`.
    pub value: f64,
    /// Position this coordinate was computed from.
    pub position: Position,
    /// Whether the offset includes the verse itself (end of a range).
    pub endpoint: bool,
}

impl Coordinate {
    /// Page the coordinate falls on. An endpoint at the last verse of a page
    /// reports the following page.
    pub fn page(&self) -> u16 {
        self.value.floor() as u16
    }

    /// Fractional part of the coordinate.
    pub fn fraction(&self) -> f64 {
        self.value - self.value.floor()
    }

    /// Whether both coordinates denote the same position and offset kind.
    pub fn same_point(&self, other: &Coordinate) -> bool {
        self.position == other.position && self.endpoint == other.endpoint
    }
}

/// Page coordinate of `position`.
///
/// With `endpoint == false` the offset counts the verses before the
/// position (start of a range); with `endpoint == true` it also counts the
/// verse itself (end of a range).
pub fn locate(catalog: &Catalog, position: Position, endpoint: bool) -> Result<Coordinate, HifzError> {
    let chapter = catalog.chapter(position.chapter)?;
    if !chapter.has_verse(position.verse) {
        return Err(HifzError::InvalidVerseNumber {
            chapter: position.chapter,
            verse: position.verse,
        });
    }

    let pages = pages_of(catalog, position.chapter)?;
    for page in pages {
        let content = catalog.page(page)?;
        let Some(range) = content.range_of(position.chapter) else {
            continue;
        };
        if !range.contains(position.verse) {
            continue;
        }

        let mut before = content.verses_before_chapter(position.chapter)
            + u32::from(position.verse - range.first);
        if endpoint {
            before += 1;
        }
        let total = content.total_verses();
        let fraction = if total == 0 {
            0.0
        } else {
            f64::from(before) / f64::from(total)
        };
        return Ok(Coordinate {
            value: f64::from(page) + fraction,
            position,
            endpoint,
        });
    }

    Err(HifzError::MalformedIndex {
        page: pages.first,
        reason: "verse is not listed on any page of its chapter",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::synthetic;
    use hifz_catalog::Chapter;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    /// Two chapters on one page: ch1 with 5 verses, ch2 with 4.
    fn shared_page() -> Catalog {
        let chapters = vec![
            Chapter {
                id: 1,
                name: "Five".into(),
                arabic_name: String::new(),
                verse_count: 5,
                first_page: 1,
            },
            Chapter {
                id: 2,
                name: "Four".into(),
                arabic_name: String::new(),
                verse_count: 4,
                first_page: 1,
            },
        ];
        Catalog::from_page_starts(chapters, &[(1, 1)]).unwrap()
    }

    #[test]
    fn parse_and_display() {
        let p: Position = "2:255".parse().unwrap();
        assert_eq!(p, Position::new(2, 255));
        assert_eq!(p.to_string(), "2:255");
        assert_eq!(" 114 : 6 ".parse::<Position>().unwrap(), Position::new(114, 6));
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "2", "2:", ":5", "a:b", "300:1", "2:-1"] {
            assert!(
                matches!(s.parse::<Position>(), Err(HifzError::InvalidPosition(_))),
                "{s:?}"
            );
        }
    }

    #[test]
    fn recitation_order() {
        assert!(Position::new(1, 7) < Position::new(2, 1));
        assert!(Position::new(2, 9) < Position::new(2, 10));
    }

    #[test]
    fn first_verse_of_text_is_page_start() {
        let cat = synthetic(&[1, 3], 5);
        let c = locate(&cat, Position::new(1, 1), false).unwrap();
        assert!(approx(c.value, 1.0));
        assert_eq!(c.page(), 1);
    }

    #[test]
    fn start_and_end_offsets() {
        // Page 2 holds ch1 verses 4..=6.
        let cat = synthetic(&[1, 3], 5);
        let start = locate(&cat, Position::new(1, 5), false).unwrap();
        let end = locate(&cat, Position::new(1, 5), true).unwrap();
        assert!(approx(start.value, 2.0 + 1.0 / 3.0));
        assert!(approx(end.value, 2.0 + 2.0 / 3.0));
    }

    #[test]
    fn endpoint_of_last_verse_reaches_next_page() {
        let cat = synthetic(&[1, 3], 5);
        let end = locate(&cat, Position::new(1, 6), true).unwrap();
        assert!(approx(end.value, 3.0));
        let next = locate(&cat, Position::new(2, 1), false).unwrap();
        assert!(approx(end.value, next.value));
        assert!(!end.same_point(&next));
    }

    #[test]
    fn earlier_chapters_on_page_count_as_before() {
        let cat = shared_page();
        let c = locate(&cat, Position::new(2, 1), false).unwrap();
        assert!(approx(c.value, 1.0 + 5.0 / 9.0));
        let end = locate(&cat, Position::new(2, 4), true).unwrap();
        assert!(approx(end.value, 2.0));
    }

    #[test]
    fn invalid_inputs() {
        let cat = synthetic(&[1, 3], 5);
        assert_eq!(
            locate(&cat, Position::new(9, 1), false),
            Err(HifzError::InvalidChapterId(9))
        );
        assert_eq!(
            locate(&cat, Position::new(1, 0), false),
            Err(HifzError::InvalidVerseNumber { chapter: 1, verse: 0 })
        );
        assert_eq!(
            locate(&cat, Position::new(1, 7), true),
            Err(HifzError::InvalidVerseNumber { chapter: 1, verse: 7 })
        );
    }

    #[test]
    fn coordinate_parts() {
        let cat = synthetic(&[1, 3], 5);
        let c = locate(&cat, Position::new(2, 8), false).unwrap();
        assert_eq!(c.page(), 5);
        assert!(approx(c.fraction(), 1.0 / 3.0));
        assert_eq!(c.position, Position::new(2, 8));
        assert!(!c.endpoint);
    }
}
