//! Long-form dates for the letterhead and signature

use chrono::{Datelike, NaiveDate};

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Primary subtag of a language code (`de-AT` → `de`)
pub fn primary_language(language: &str) -> &str {
    language.split(['-', '_']).next().unwrap_or(language)
}

/// Format `date` the way letters in `language` spell it out
///
/// `de` gives "16. Oktober 2026", `id` gives "16 Oktober 2026", anything
/// else "October 16, 2026".
pub fn format_long_date(language: &str, date: NaiveDate) -> String {
    let idx = (date.month0() as usize).min(11);
    let day = date.day();
    let year = date.year();
    match primary_language(language) {
        "de" => format!("{day}. {} {year}", MONTHS_DE[idx]),
        "id" => format!("{day} {} {year}", MONTHS_ID[idx]),
        _ => format!("{} {day}, {year}", MONTHS_EN[idx]),
    }
}

/// `YYYY-MM-DD`, as used in export file names
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_english() {
        assert_eq!(format_long_date("en", date(2026, 10, 16)), "October 16, 2026");
        assert_eq!(format_long_date("fr", date(2024, 1, 2)), "January 2, 2024");
    }

    #[test]
    fn test_german() {
        assert_eq!(format_long_date("de", date(2026, 10, 16)), "16. Oktober 2026");
        assert_eq!(format_long_date("de-AT", date(2023, 3, 1)), "1. März 2023");
    }

    #[test]
    fn test_indonesian() {
        assert_eq!(format_long_date("id", date(2026, 10, 16)), "16 Oktober 2026");
        assert_eq!(format_long_date("id", date(2025, 8, 17)), "17 Agustus 2025");
    }

    #[test]
    fn test_iso() {
        assert_eq!(iso_date(date(2023, 6, 30)), "2023-06-30");
        assert_eq!(parse_iso_date(" 2021-03-01 "), Some(date(2021, 3, 1)));
        assert_eq!(parse_iso_date("01.03.2021"), None);
    }
}
