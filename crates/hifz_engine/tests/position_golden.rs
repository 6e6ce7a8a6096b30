//! Whole-text sweeps of page ranges, coordinates and distances over the
//! bundled 604-page layout.

use hifz_engine::{
    Catalog, Coordinate, DISTANCE_STEP_PAGES, PageRange, Position, distance, locate, pages_of,
    recited_pages,
};

fn cat() -> &'static Catalog {
    Catalog::standard()
}

fn every_position() -> impl Iterator<Item = Position> {
    cat()
        .chapters()
        .iter()
        .flat_map(|c| (1..=c.verse_count).map(move |v| Position::new(c.id, v)))
}

fn at(chapter: u8, verse: u16, endpoint: bool) -> Coordinate {
    locate(cat(), Position::new(chapter, verse), endpoint).unwrap()
}

// ---------------------------------------------------------------------------
// Page ranges
// ---------------------------------------------------------------------------

#[test]
fn page_ranges_are_complete() {
    for chapter in cat().chapters() {
        let range = pages_of(cat(), chapter.id).unwrap();
        assert_eq!(range.first, chapter.first_page, "chapter {}", chapter.id);
        assert!(range.last >= range.first);
        for page in range {
            assert!(
                cat().page(page).unwrap().contains_chapter(chapter.id),
                "chapter {} missing from page {page}",
                chapter.id
            );
        }
        if range.last < cat().page_count() {
            assert!(
                !cat().page(range.last + 1).unwrap().contains_chapter(chapter.id),
                "chapter {} continues past page {}",
                chapter.id,
                range.last
            );
        }
    }
}

#[test]
fn last_chapter_ends_on_last_page() {
    assert_eq!(pages_of(cat(), 114).unwrap(), PageRange { first: 604, last: 604 });
}

#[test]
fn chapters_ending_at_a_page_break() {
    // Al-Imran, Al-Jinn and As-Saffat open at the top of a fresh page.
    assert_eq!(pages_of(cat(), 2).unwrap(), PageRange { first: 2, last: 49 });
    assert_eq!(pages_of(cat(), 71).unwrap(), PageRange { first: 570, last: 571 });
    assert_eq!(pages_of(cat(), 36).unwrap(), PageRange { first: 440, last: 445 });
}

#[test]
fn chapter_ending_on_next_chapters_first_page() {
    // An-Nisa 176 shares page 106 with the opening of Al-Ma'idah.
    assert_eq!(pages_of(cat(), 4).unwrap(), PageRange { first: 77, last: 106 });
    assert_eq!(pages_of(cat(), 67).unwrap(), PageRange { first: 562, last: 564 });
}

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

#[test]
fn coordinates_increase_through_the_text() {
    let mut prev: Option<(Position, f64)> = None;
    for pos in every_position() {
        let value = locate(cat(), pos, false).unwrap().value;
        if let Some((prev_pos, prev_value)) = prev {
            assert!(value > prev_value, "{pos} ({value}) after {prev_pos} ({prev_value})");
        }
        prev = Some((pos, value));
    }
}

#[test]
fn end_of_verse_meets_start_of_next() {
    let positions: Vec<Position> = every_position().collect();
    for pair in positions.windows(2) {
        let end = locate(cat(), pair[0], true).unwrap();
        let start = locate(cat(), pair[1], false).unwrap();
        assert!((end.value - start.value).abs() < 1e-9, "{} / {}", pair[0], pair[1]);
    }
}

#[test]
fn start_coordinates_stay_on_their_page() {
    for content in cat().pages() {
        let p = f64::from(content.page);
        for span in &content.chapters {
            for verse in span.verses.first..=span.verses.last {
                let c = locate(cat(), Position::new(span.chapter, verse), false).unwrap();
                assert!(
                    c.value >= p && c.value < p + 1.0,
                    "{}:{verse} at {} not on page {}",
                    span.chapter,
                    c.value,
                    content.page
                );
                assert_eq!(c.page(), content.page);
            }
        }
    }
}

#[test]
fn last_page_counts_earlier_chapters_first() {
    // Page 604: Al-Ikhlas 1-4, Al-Falaq 1-5, An-Nas 1-6.
    assert_eq!(at(114, 6, true).value, 605.0);
    assert!((at(114, 4, true).value - (604.0 + 13.0 / 15.0)).abs() < 1e-12);
    assert!((at(114, 1, false).value - (604.0 + 9.0 / 15.0)).abs() < 1e-12);
    assert!((at(113, 1, false).value - (604.0 + 4.0 / 15.0)).abs() < 1e-12);
    assert_eq!(at(112, 1, false).value, 604.0);
}

#[test]
fn opening_chapter_fills_page_one() {
    assert_eq!(at(1, 1, false).value, 1.0);
    assert_eq!(at(1, 7, true).value, 2.0);
    assert_eq!(at(2, 1, false).value, 2.0);
}

// ---------------------------------------------------------------------------
// Distances
// ---------------------------------------------------------------------------

#[test]
fn adjacent_verses_are_half_a_page_apart() {
    let positions: Vec<Position> = every_position().collect();
    for pair in positions.windows(2) {
        let end = locate(cat(), pair[0], true).unwrap();
        let start = locate(cat(), pair[1], false).unwrap();
        assert_eq!(distance(&end, &start), DISTANCE_STEP_PAGES);
    }
}

#[test]
fn zero_only_for_the_same_point() {
    for pos in [Position::new(2, 255), Position::new(36, 1), Position::new(114, 6)] {
        for endpoint in [false, true] {
            let c = locate(cat(), pos, endpoint).unwrap();
            assert_eq!(distance(&c, &c), 0.0);
        }
        let start = locate(cat(), pos, false).unwrap();
        let end = locate(cat(), pos, true).unwrap();
        assert!(distance(&start, &end) >= DISTANCE_STEP_PAGES);
    }
}

#[test]
fn recitation_lengths() {
    // Al-Fatihah is exactly page 1.
    assert_eq!(recited_pages(cat(), Position::new(1, 1), Position::new(1, 7)).unwrap(), 1.0);
    // Al-Baqarah spans pages 2-49, ending at the bottom of page 49.
    let baqarah = recited_pages(cat(), Position::new(2, 1), Position::new(2, 286)).unwrap();
    assert_eq!(baqarah, 48.0);
    // Last three chapters share page 604.
    assert_eq!(
        recited_pages(cat(), Position::new(112, 1), Position::new(114, 6)).unwrap(),
        1.0
    );
    assert_eq!(
        recited_pages(cat(), Position::new(114, 1), Position::new(114, 6)).unwrap(),
        0.5
    );
}
