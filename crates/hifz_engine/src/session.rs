//! Recorded memorization sessions.

use chrono::NaiveDate;
use hifz_catalog::Chapter;
use serde::{Deserialize, Serialize};

/// One recorded session, as supplied by the surrounding system.
///
/// Page and verse bounds are optional: older records may only carry the
/// chapter and the date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Chapter the session covered, by transliterated or Arabic name.
    pub chapter_name: String,
    #[serde(default)]
    pub from_page: Option<u16>,
    #[serde(default)]
    pub to_page: Option<u16>,
    #[serde(default)]
    pub from_verse: Option<u16>,
    #[serde(default)]
    pub to_verse: Option<u16>,
    pub date: NaiveDate,
}

impl SessionRecord {
    pub fn new(chapter_name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            chapter_name: chapter_name.into(),
            from_page: None,
            to_page: None,
            from_verse: None,
            to_verse: None,
            date,
        }
    }

    pub fn with_pages(mut self, from: u16, to: u16) -> Self {
        self.from_page = Some(from);
        self.to_page = Some(to);
        self
    }

    pub fn with_verses(mut self, from: u16, to: u16) -> Self {
        self.from_verse = Some(from);
        self.to_verse = Some(to);
        self
    }
}

/// Most recent record for `chapter`: greatest date, later entry on ties.
pub fn latest_for_chapter<'a>(
    history: &'a [SessionRecord],
    chapter: &Chapter,
) -> Option<&'a SessionRecord> {
    history
        .iter()
        .filter(|r| chapter.matches_name(&r.chapter_name))
        .max_by_key(|r| r.date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn chapter() -> Chapter {
        Chapter {
            id: 67,
            name: "Al-Mulk".into(),
            arabic_name: "الملك".into(),
            verse_count: 30,
            first_page: 562,
        }
    }

    #[test]
    fn picks_greatest_date() {
        let history = vec![
            SessionRecord::new("Al-Mulk", date(5)).with_pages(562, 562),
            SessionRecord::new("Al-Mulk", date(9)).with_pages(563, 563),
            SessionRecord::new("Al-Mulk", date(7)).with_pages(564, 564),
        ];
        let latest = latest_for_chapter(&history, &chapter()).unwrap();
        assert_eq!(latest.to_page, Some(563));
    }

    #[test]
    fn ties_go_to_later_entry() {
        let history = vec![
            SessionRecord::new("Al-Mulk", date(9)).with_pages(562, 562),
            SessionRecord::new("Al-Mulk", date(9)).with_pages(563, 563),
        ];
        let latest = latest_for_chapter(&history, &chapter()).unwrap();
        assert_eq!(latest.to_page, Some(563));
    }

    #[test]
    fn matches_either_name() {
        let history = vec![
            SessionRecord::new("Al-Qalam", date(20)),
            SessionRecord::new("الملك", date(3)).with_verses(1, 12),
            SessionRecord::new("al-mulk", date(2)),
        ];
        let latest = latest_for_chapter(&history, &chapter()).unwrap();
        assert_eq!(latest.date, date(3));
        assert_eq!(latest.to_verse, Some(12));
    }

    #[test]
    fn no_record_for_chapter() {
        let history = vec![SessionRecord::new("Al-Qalam", date(1))];
        assert!(latest_for_chapter(&history, &chapter()).is_none());
        assert!(latest_for_chapter(&[], &chapter()).is_none());
    }

    #[test]
    fn json_with_missing_bounds() {
        let r: SessionRecord =
            serde_json::from_str(r#"{"chapter_name":"Al-Mulk","to_page":563,"date":"2024-03-09"}"#)
                .unwrap();
        assert_eq!(r.to_page, Some(563));
        assert_eq!(r.from_page, None);
        assert_eq!(r.date, date(9));
    }
}
