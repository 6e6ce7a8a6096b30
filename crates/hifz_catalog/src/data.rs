//! Bundled layout of the standard 604-page Madani mushaf.
//!
//! Two tables describe the whole layout: one row per chapter and the first
//! verse printed on every page. The per-page index is derived from them by
//! [`Catalog::from_page_starts`](crate::Catalog::from_page_starts).

/// Number of chapters in the bundled layout.
pub const CHAPTER_COUNT: usize = 114;

/// Number of printed pages in the bundled layout.
pub const PAGE_COUNT: usize = 604;

/// Total verse count across all chapters.
pub const VERSE_COUNT: u32 = 6236;

/// `(name, arabic_name, verse_count, first_page)`, indexed by `chapter_id - 1`.
#[rustfmt::skip]
pub const CHAPTER_TABLE: [(&str, &str, u16, u16); CHAPTER_COUNT] = [
    ("Al-Fatihah", "الفاتحة", 7, 1), // 1
    ("Al-Baqarah", "البقرة", 286, 2), // 2
    ("Al-Imran", "آل عمران", 200, 50), // 3
    ("An-Nisa", "النساء", 176, 77), // 4
    ("Al-Ma'idah", "المائدة", 120, 106), // 5
    ("Al-An'am", "الأنعام", 165, 128), // 6
    ("Al-A'raf", "الأعراف", 206, 151), // 7
    ("Al-Anfal", "الأنفال", 75, 177), // 8
    ("At-Tawbah", "التوبة", 129, 187), // 9
    ("Yunus", "يونس", 109, 208), // 10
    ("Hud", "هود", 123, 221), // 11
    ("Yusuf", "يوسف", 111, 235), // 12
    ("Ar-Ra'd", "الرعد", 43, 249), // 13
    ("Ibrahim", "إبراهيم", 52, 255), // 14
    ("Al-Hijr", "الحجر", 99, 262), // 15
    ("An-Nahl", "النحل", 128, 267), // 16
    ("Al-Isra", "الإسراء", 111, 282), // 17
    ("Al-Kahf", "الكهف", 110, 293), // 18
    ("Maryam", "مريم", 98, 305), // 19
    ("Taha", "طه", 135, 312), // 20
    ("Al-Anbiya", "الأنبياء", 112, 322), // 21
    ("Al-Hajj", "الحج", 78, 332), // 22
    ("Al-Mu'minun", "المؤمنون", 118, 342), // 23
    ("An-Nur", "النور", 64, 350), // 24
    ("Al-Furqan", "الفرقان", 77, 359), // 25
    ("Ash-Shu'ara", "الشعراء", 227, 367), // 26
    ("An-Naml", "النمل", 93, 377), // 27
    ("Al-Qasas", "القصص", 88, 385), // 28
    ("Al-Ankabut", "العنكبوت", 69, 396), // 29
    ("Ar-Rum", "الروم", 60, 404), // 30
    ("Luqman", "لقمان", 34, 411), // 31
    ("As-Sajdah", "السجدة", 30, 415), // 32
    ("Al-Ahzab", "الأحزاب", 73, 418), // 33
    ("Saba", "سبأ", 54, 428), // 34
    ("Fatir", "فاطر", 45, 434), // 35
    ("Ya-Sin", "يس", 83, 440), // 36
    ("As-Saffat", "الصافات", 182, 446), // 37
    ("Sad", "ص", 88, 453), // 38
    ("Az-Zumar", "الزمر", 75, 458), // 39
    ("Ghafir", "غافر", 85, 467), // 40
    ("Fussilat", "فصلت", 54, 477), // 41
    ("Ash-Shura", "الشورى", 53, 483), // 42
    ("Az-Zukhruf", "الزخرف", 89, 489), // 43
    ("Ad-Dukhan", "الدخان", 59, 496), // 44
    ("Al-Jathiyah", "الجاثية", 37, 499), // 45
    ("Al-Ahqaf", "الأحقاف", 35, 502), // 46
    ("Muhammad", "محمد", 38, 507), // 47
    ("Al-Fath", "الفتح", 29, 511), // 48
    ("Al-Hujurat", "الحجرات", 18, 515), // 49
    ("Qaf", "ق", 45, 518), // 50
    ("Adh-Dhariyat", "الذاريات", 60, 520), // 51
    ("At-Tur", "الطور", 49, 523), // 52
    ("An-Najm", "النجم", 62, 526), // 53
    ("Al-Qamar", "القمر", 55, 528), // 54
    ("Ar-Rahman", "الرحمن", 78, 531), // 55
    ("Al-Waqi'ah", "الواقعة", 96, 534), // 56
    ("Al-Hadid", "الحديد", 29, 537), // 57
    ("Al-Mujadilah", "المجادلة", 22, 542), // 58
    ("Al-Hashr", "الحشر", 24, 545), // 59
    ("Al-Mumtahanah", "الممتحنة", 13, 549), // 60
    ("As-Saff", "الصف", 14, 551), // 61
    ("Al-Jumu'ah", "الجمعة", 11, 553), // 62
    ("Al-Munafiqun", "المنافقون", 11, 554), // 63
    ("At-Taghabun", "التغابن", 18, 556), // 64
    ("At-Talaq", "الطلاق", 12, 558), // 65
    ("At-Tahrim", "التحريم", 12, 560), // 66
    ("Al-Mulk", "الملك", 30, 562), // 67
    ("Al-Qalam", "القلم", 52, 564), // 68
    ("Al-Haqqah", "الحاقة", 52, 566), // 69
    ("Al-Ma'arij", "المعارج", 44, 568), // 70
    ("Nuh", "نوح", 28, 570), // 71
    ("Al-Jinn", "الجن", 28, 572), // 72
    ("Al-Muzzammil", "المزمل", 20, 574), // 73
    ("Al-Muddaththir", "المدثر", 56, 575), // 74
    ("Al-Qiyamah", "القيامة", 40, 577), // 75
    ("Al-Insan", "الإنسان", 31, 578), // 76
    ("Al-Mursalat", "المرسلات", 50, 580), // 77
    ("An-Naba", "النبأ", 40, 582), // 78
    ("An-Nazi'at", "النازعات", 46, 583), // 79
    ("Abasa", "عبس", 42, 585), // 80
    ("At-Takwir", "التكوير", 29, 586), // 81
    ("Al-Infitar", "الانفطار", 19, 587), // 82
    ("Al-Mutaffifin", "المطففين", 36, 587), // 83
    ("Al-Inshiqaq", "الانشقاق", 25, 589), // 84
    ("Al-Buruj", "البروج", 22, 590), // 85
    ("At-Tariq", "الطارق", 17, 591), // 86
    ("Al-A'la", "الأعلى", 19, 591), // 87
    ("Al-Ghashiyah", "الغاشية", 26, 592), // 88
    ("Al-Fajr", "الفجر", 30, 593), // 89
    ("Al-Balad", "البلد", 20, 594), // 90
    ("Ash-Shams", "الشمس", 15, 595), // 91
    ("Al-Layl", "الليل", 21, 595), // 92
    ("Ad-Duha", "الضحى", 11, 596), // 93
    ("Ash-Sharh", "الشرح", 8, 596), // 94
    ("At-Tin", "التين", 8, 597), // 95
    ("Al-Alaq", "العلق", 19, 597), // 96
    ("Al-Qadr", "القدر", 5, 598), // 97
    ("Al-Bayyinah", "البينة", 8, 598), // 98
    ("Az-Zalzalah", "الزلزلة", 8, 599), // 99
    ("Al-Adiyat", "العاديات", 11, 599), // 100
    ("Al-Qari'ah", "القارعة", 11, 600), // 101
    ("At-Takathur", "التكاثر", 8, 600), // 102
    ("Al-Asr", "العصر", 3, 601), // 103
    ("Al-Humazah", "الهمزة", 9, 601), // 104
    ("Al-Fil", "الفيل", 5, 601), // 105
    ("Quraysh", "قريش", 4, 602), // 106
    ("Al-Ma'un", "الماعون", 7, 602), // 107
    ("Al-Kawthar", "الكوثر", 3, 602), // 108
    ("Al-Kafirun", "الكافرون", 6, 603), // 109
    ("An-Nasr", "النصر", 3, 603), // 110
    ("Al-Masad", "المسد", 5, 603), // 111
    ("Al-Ikhlas", "الإخلاص", 4, 604), // 112
    ("Al-Falaq", "الفلق", 5, 604), // 113
    ("An-Nas", "الناس", 6, 604), // 114
];

/// First `(chapter, verse)` printed on each page, indexed by `page - 1`.
#[rustfmt::skip]
pub const PAGE_STARTS: [(u8, u16); PAGE_COUNT] = [
    /*   1 */ (1, 1), (2, 1), (2, 6), (2, 17), (2, 25), (2, 30), (2, 38), (2, 49),
    /*   9 */ (2, 58), (2, 62), (2, 70), (2, 77), (2, 84), (2, 89), (2, 94), (2, 102),
    /*  17 */ (2, 106), (2, 113), (2, 120), (2, 127), (2, 135), (2, 142), (2, 146), (2, 154),
    /*  25 */ (2, 164), (2, 170), (2, 177), (2, 182), (2, 187), (2, 191), (2, 197), (2, 203),
    /*  33 */ (2, 211), (2, 216), (2, 220), (2, 225), (2, 231), (2, 234), (2, 238), (2, 246),
    /*  41 */ (2, 249), (2, 253), (2, 257), (2, 260), (2, 265), (2, 270), (2, 275), (2, 282),
    /*  49 */ (2, 283), (3, 1), (3, 10), (3, 16), (3, 23), (3, 30), (3, 38), (3, 46),
    /*  57 */ (3, 53), (3, 62), (3, 71), (3, 78), (3, 84), (3, 92), (3, 101), (3, 109),
    /*  65 */ (3, 116), (3, 122), (3, 133), (3, 141), (3, 149), (3, 154), (3, 158), (3, 166),
    /*  73 */ (3, 174), (3, 181), (3, 187), (3, 195), (4, 1), (4, 7), (4, 12), (4, 15),
    /*  81 */ (4, 20), (4, 24), (4, 27), (4, 34), (4, 38), (4, 45), (4, 52), (4, 60),
    /*  89 */ (4, 66), (4, 75), (4, 80), (4, 87), (4, 92), (4, 95), (4, 102), (4, 106),
    /*  97 */ (4, 114), (4, 122), (4, 128), (4, 135), (4, 141), (4, 148), (4, 155), (4, 163),
    /* 105 */ (4, 171), (4, 176), (5, 3), (5, 6), (5, 10), (5, 14), (5, 18), (5, 24),
    /* 113 */ (5, 32), (5, 37), (5, 42), (5, 46), (5, 51), (5, 58), (5, 65), (5, 71),
    /* 121 */ (5, 77), (5, 83), (5, 90), (5, 96), (5, 104), (5, 109), (5, 114), (6, 1),
    /* 129 */ (6, 9), (6, 19), (6, 28), (6, 36), (6, 45), (6, 53), (6, 60), (6, 69),
    /* 137 */ (6, 74), (6, 82), (6, 91), (6, 95), (6, 102), (6, 111), (6, 119), (6, 125),
    /* 145 */ (6, 132), (6, 138), (6, 143), (6, 147), (6, 152), (6, 158), (7, 1), (7, 12),
    /* 153 */ (7, 23), (7, 31), (7, 38), (7, 44), (7, 52), (7, 58), (7, 68), (7, 74),
    /* 161 */ (7, 82), (7, 88), (7, 96), (7, 105), (7, 121), (7, 131), (7, 138), (7, 144),
    /* 169 */ (7, 150), (7, 156), (7, 160), (7, 164), (7, 171), (7, 179), (7, 188), (7, 196),
    /* 177 */ (8, 1), (8, 9), (8, 17), (8, 26), (8, 34), (8, 41), (8, 46), (8, 53),
    /* 185 */ (8, 62), (8, 70), (9, 1), (9, 7), (9, 14), (9, 21), (9, 27), (9, 32),
    /* 193 */ (9, 37), (9, 41), (9, 48), (9, 55), (9, 62), (9, 69), (9, 73), (9, 80),
    /* 201 */ (9, 87), (9, 94), (9, 100), (9, 107), (9, 112), (9, 118), (9, 123), (10, 1),
    /* 209 */ (10, 7), (10, 15), (10, 21), (10, 26), (10, 34), (10, 43), (10, 54), (10, 62),
    /* 217 */ (10, 71), (10, 79), (10, 89), (10, 98), (10, 107), (11, 6), (11, 13), (11, 20),
    /* 225 */ (11, 29), (11, 38), (11, 46), (11, 54), (11, 63), (11, 72), (11, 82), (11, 89),
    /* 233 */ (11, 98), (11, 109), (11, 118), (12, 5), (12, 15), (12, 23), (12, 31), (12, 38),
    /* 241 */ (12, 44), (12, 53), (12, 64), (12, 70), (12, 79), (12, 87), (12, 96), (12, 104),
    /* 249 */ (13, 1), (13, 6), (13, 14), (13, 19), (13, 29), (13, 35), (13, 43), (14, 6),
    /* 257 */ (14, 11), (14, 19), (14, 25), (14, 34), (14, 43), (15, 1), (15, 16), (15, 32),
    /* 265 */ (15, 52), (15, 71), (15, 91), (16, 7), (16, 15), (16, 27), (16, 35), (16, 43),
    /* 273 */ (16, 55), (16, 65), (16, 73), (16, 80), (16, 88), (16, 94), (16, 103), (16, 111),
    /* 281 */ (16, 119), (17, 1), (17, 8), (17, 18), (17, 28), (17, 39), (17, 50), (17, 59),
    /* 289 */ (17, 67), (17, 76), (17, 87), (17, 97), (17, 105), (18, 5), (18, 16), (18, 21),
    /* 297 */ (18, 28), (18, 35), (18, 46), (18, 54), (18, 62), (18, 75), (18, 84), (18, 98),
    /* 305 */ (19, 1), (19, 12), (19, 26), (19, 39), (19, 52), (19, 65), (19, 77), (19, 96),
    /* 313 */ (20, 13), (20, 38), (20, 52), (20, 65), (20, 77), (20, 88), (20, 99), (20, 114),
    /* 321 */ (20, 126), (21, 1), (21, 11), (21, 25), (21, 36), (21, 45), (21, 58), (21, 73),
    /* 329 */ (21, 82), (21, 91), (21, 102), (22, 1), (22, 6), (22, 16), (22, 24), (22, 31),
    /* 337 */ (22, 39), (22, 47), (22, 56), (22, 65), (22, 73), (23, 1), (23, 18), (23, 28),
    /* 345 */ (23, 43), (23, 60), (23, 75), (23, 90), (23, 105), (24, 1), (24, 11), (24, 21),
    /* 353 */ (24, 28), (24, 32), (24, 37), (24, 44), (24, 54), (24, 59), (24, 62), (25, 3),
    /* 361 */ (25, 12), (25, 21), (25, 33), (25, 44), (25, 56), (25, 68), (26, 1), (26, 20),
    /* 369 */ (26, 40), (26, 61), (26, 84), (26, 112), (26, 137), (26, 160), (26, 184), (26, 207),
    /* 377 */ (27, 1), (27, 14), (27, 23), (27, 36), (27, 45), (27, 56), (27, 64), (27, 77),
    /* 385 */ (27, 89), (28, 6), (28, 14), (28, 22), (28, 29), (28, 36), (28, 44), (28, 51),
    /* 393 */ (28, 60), (28, 71), (28, 78), (28, 85), (29, 7), (29, 15), (29, 24), (29, 31),
    /* 401 */ (29, 39), (29, 46), (29, 53), (29, 64), (30, 6), (30, 16), (30, 25), (30, 33),
    /* 409 */ (30, 42), (30, 51), (31, 1), (31, 12), (31, 20), (31, 29), (32, 1), (32, 12),
    /* 417 */ (32, 21), (33, 1), (33, 7), (33, 16), (33, 23), (33, 31), (33, 36), (33, 44),
    /* 425 */ (33, 51), (33, 55), (33, 63), (34, 1), (34, 8), (34, 15), (34, 23), (34, 32),
    /* 433 */ (34, 40), (35, 1), (35, 5), (35, 15), (35, 25), (35, 33), (35, 41), (36, 1),
    /* 441 */ (36, 13), (36, 28), (36, 41), (36, 55), (36, 71), (37, 1), (37, 25), (37, 52),
    /* 449 */ (37, 77), (37, 103), (37, 127), (37, 154), (38, 1), (38, 17), (38, 27), (38, 43),
    /* 457 */ (38, 62), (38, 84), (39, 6), (39, 11), (39, 22), (39, 32), (39, 41), (39, 48),
    /* 465 */ (39, 57), (39, 68), (39, 75), (40, 8), (40, 17), (40, 26), (40, 34), (40, 41),
    /* 473 */ (40, 50), (40, 59), (40, 67), (40, 78), (41, 1), (41, 12), (41, 21), (41, 30),
    /* 481 */ (41, 39), (41, 47), (42, 1), (42, 11), (42, 16), (42, 23), (42, 32), (42, 45),
    /* 489 */ (42, 52), (43, 11), (43, 23), (43, 34), (43, 48), (43, 61), (43, 74), (44, 1),
    /* 497 */ (44, 19), (44, 40), (45, 1), (45, 14), (45, 23), (45, 33), (46, 6), (46, 15),
    /* 505 */ (46, 21), (46, 29), (47, 1), (47, 12), (47, 20), (47, 30), (48, 1), (48, 10),
    /* 513 */ (48, 16), (48, 24), (48, 29), (49, 5), (49, 12), (50, 1), (50, 16), (50, 36),
    /* 521 */ (51, 7), (51, 31), (51, 52), (52, 15), (52, 32), (52, 45), (53, 27), (53, 45),
    /* 529 */ (54, 7), (54, 28), (54, 50), (55, 17), (55, 41), (55, 68), (56, 17), (56, 51),
    /* 537 */ (56, 77), (57, 4), (57, 12), (57, 19), (57, 25), (57, 29), (58, 7), (58, 12),
    /* 545 */ (58, 22), (59, 4), (59, 10), (59, 17), (60, 1), (60, 6), (60, 12), (61, 6),
    /* 553 */ (62, 1), (62, 9), (63, 5), (63, 11), (64, 10), (65, 1), (65, 6), (65, 12),
    /* 561 */ (66, 8), (67, 1), (67, 13), (67, 27), (68, 16), (68, 43), (69, 9), (69, 35),
    /* 569 */ (70, 11), (70, 40), (71, 11), (72, 1), (72, 14), (73, 1), (73, 20), (74, 18),
    /* 577 */ (74, 48), (75, 20), (76, 6), (76, 26), (77, 20), (78, 1), (78, 31), (79, 16),
    /* 585 */ (80, 1), (81, 1), (82, 1), (83, 7), (83, 35), (85, 1), (86, 1), (87, 16),
    /* 593 */ (89, 1), (89, 24), (91, 1), (92, 15), (95, 1), (97, 1), (98, 8), (100, 10),
    /* 601 */ (103, 1), (106, 1), (109, 1), (112, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_total() {
        let total: u32 = CHAPTER_TABLE.iter().map(|c| u32::from(c.2)).sum();
        assert_eq!(total, VERSE_COUNT);
    }

    #[test]
    fn first_pages_non_decreasing() {
        for w in CHAPTER_TABLE.windows(2) {
            assert!(w[0].3 <= w[1].3, "{} after {}", w[1].0, w[0].0);
        }
        assert_eq!(CHAPTER_TABLE[0].3, 1);
        assert_eq!(CHAPTER_TABLE[CHAPTER_COUNT - 1].3, PAGE_COUNT as u16);
    }

    #[test]
    fn page_starts_strictly_increasing() {
        assert_eq!(PAGE_STARTS[0], (1, 1));
        for (i, w) in PAGE_STARTS.windows(2).enumerate() {
            assert!(w[0] < w[1], "page {}", i + 2);
        }
    }

    #[test]
    fn page_starts_name_real_verses() {
        for (i, &(chapter, verse)) in PAGE_STARTS.iter().enumerate() {
            let count = CHAPTER_TABLE[chapter as usize - 1].2;
            assert!(verse >= 1 && verse <= count, "page {}", i + 1);
        }
    }
}
