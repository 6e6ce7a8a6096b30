//! Synthetic layouts for unit tests.

use hifz_catalog::{Catalog, Chapter};

/// Build a layout whose chapters open at `first_pages` (1-based ids in
/// order, `first_pages[0] == 1`).
///
/// Each chapter opens at the top of its first page. A chapter sharing its
/// first page with the next one holds 2 verses; any other chapter holds 3
/// verses per page up to the page before the next chapter opens.
pub(crate) fn synthetic(first_pages: &[u16], page_count: u16) -> Catalog {
    let mut chapters = Vec::with_capacity(first_pages.len());
    for (i, &first) in first_pages.iter().enumerate() {
        let next = first_pages.get(i + 1).copied().unwrap_or(page_count + 1);
        let verse_count = if next == first { 2 } else { 3 * (next - first) };
        chapters.push(Chapter {
            id: (i + 1) as u8,
            name: format!("Chapter {}", i + 1),
            arabic_name: String::new(),
            verse_count,
            first_page: first,
        });
    }

    let mut starts = Vec::with_capacity(page_count as usize);
    for page in 1..=page_count {
        let start = match first_pages.iter().position(|&f| f == page) {
            Some(idx) => ((idx + 1) as u8, 1),
            None => {
                let idx = first_pages
                    .iter()
                    .rposition(|&f| f < page)
                    .expect("first chapter opens on page 1");
                ((idx + 1) as u8, 3 * (page - first_pages[idx]) + 1)
            }
        };
        starts.push(start);
    }
    Catalog::from_page_starts(chapters, &starts).expect("synthetic layout is consistent")
}

/// 604 pages with chapter 51 opening on page 450.
///
/// Chapters 1-50 open every 9 pages from page 1; chapters 51-114 open
/// every 2 pages from page 450.
pub(crate) fn reverse_order_fixture() -> Catalog {
    let mut first_pages: Vec<u16> = (0..50).map(|i| 1 + 9 * i).collect();
    first_pages.extend((0..64).map(|k| 450 + 2 * k));
    synthetic(&first_pages, 604)
}
