//! Character and substring counts over the raw URL text.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// CJK ideographs that carry a numeric value (Unihan primary, accounting and
/// other numerics) without being in a Number category. Sorted.
const IDEOGRAPHIC_NUMERALS: &[char] = &[
    '\u{3405}', '\u{3483}', '\u{382A}', '\u{3B4D}', '\u{4E00}', '\u{4E03}', '\u{4E07}',
    '\u{4E09}', '\u{4E24}', '\u{4E5D}', '\u{4E8C}', '\u{4E94}', '\u{4E96}', '\u{4EBF}',
    '\u{4EC0}', '\u{4EC8}', '\u{4EDF}', '\u{4EE8}', '\u{4F0D}', '\u{4F70}', '\u{5104}',
    '\u{5146}', '\u{5169}', '\u{516B}', '\u{516D}', '\u{5341}', '\u{5343}', '\u{5344}',
    '\u{5345}', '\u{534C}', '\u{53C1}', '\u{53C2}', '\u{53C3}', '\u{53C4}', '\u{56DB}',
    '\u{58F1}', '\u{58F9}', '\u{5E7A}', '\u{5EFE}', '\u{5EFF}', '\u{5F0C}', '\u{5F0D}',
    '\u{5F0E}', '\u{5F10}', '\u{62FE}', '\u{634C}', '\u{67D2}', '\u{6F06}', '\u{7396}',
    '\u{767E}', '\u{79ED}', '\u{8086}', '\u{842C}', '\u{8CAE}', '\u{8CB3}', '\u{8D30}',
    '\u{9621}', '\u{9646}', '\u{964C}', '\u{9678}', '\u{96F6}', '\u{F96B}', '\u{F973}',
    '\u{F978}', '\u{F9B2}', '\u{F9D1}', '\u{F9D3}', '\u{F9FD}',
];

/// Number of occurrences of `c`.
pub fn count_char(url: &str, c: char) -> usize {
    url.chars().filter(|&x| x == c).count()
}

/// Non-overlapping occurrences of `needle` (so `wwww` holds one `www`).
pub fn count_substr(url: &str, needle: &str) -> usize {
    url.matches(needle).count()
}

/// Length in characters, not bytes.
pub fn url_length(url: &str) -> usize {
    url.chars().count()
}

/// Characters with a numeric value: the Number categories (`Nd`, `Nl`,
/// `No`) plus ideographic numerals such as `一` or `百`.
pub fn is_numeric_char(c: char) -> bool {
    matches!(c.general_category_group(), GeneralCategoryGroup::Number)
        || IDEOGRAPHIC_NUMERALS.binary_search(&c).is_ok()
}

/// Letters by general category (`L*`). Combining vowel signs and letter-like
/// numbers such as `Ⅻ` are not letters.
pub fn is_letter_char(c: char) -> bool {
    matches!(c.general_category_group(), GeneralCategoryGroup::Letter)
}

pub fn digit_count(url: &str) -> usize {
    url.chars().filter(|&c| is_numeric_char(c)).count()
}

pub fn letter_count(url: &str) -> usize {
    url.chars().filter(|&c| is_letter_char(c)).count()
}
