//! Small utility helpers for config lines, date display and text fitting.

pub mod config;

use chrono::{Datelike, NaiveDate};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Indonesian month names, January first.
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

/// What: Format a `YYYY-MM-DD` date the way the portal shows it (`5 Oktober 2024`).
///
/// Inputs:
/// - `raw`: Date as stored in the data file; an RFC 3339 timestamp is accepted too.
///
/// Output:
/// - Long Indonesian date, or the input unchanged when it cannot be parsed.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let t = raw.trim();
    let parsed = NaiveDate::parse_from_str(t, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(t)
            .ok()
            .map(|dt| dt.date_naive())
    });
    match parsed {
        Some(d) => {
            let month = MONTHS_ID[d.month0() as usize];
            format!("{} {month} {}", d.day(), d.year())
        }
        None => raw.to_string(),
    }
}

/// What: Cut `s` to at most `max` terminal columns, appending `…` when shortened.
///
/// Details:
/// - Uses display width, so wide characters count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Dates render with Indonesian month names; junk passes through.
    fn format_date_indonesian() {
        assert_eq!(format_date("2024-10-05"), "5 Oktober 2024");
        assert_eq!(format_date("2024-01-31"), "31 Januari 2024");
        assert_eq!(format_date("2024-05-20T08:00:00+07:00"), "20 Mei 2024");
        assert_eq!(format_date("kemarin"), "kemarin");
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate_to_width("Desa", 10), "Desa");
        assert_eq!(truncate_to_width("Desa Sejahtera", 6), "Desa …");
        assert_eq!(truncate_to_width("Desa", 0), "");
    }
}
