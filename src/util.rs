//! Text helpers shared by the site layer.

use std::borrow::Cow;

use chrono::{Datelike, NaiveDate, Weekday};

/// Decode bytes to a string.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252 (common in hand-edited content files)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8 without
/// a BOM.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Truncate an ISO timestamp to its date part.
///
/// # Examples
///
/// ```
/// use notedown::util::truncate_to_date;
///
/// assert_eq!(truncate_to_date("2022-05-26T16:26:51Z"), "2022-05-26");
/// assert_eq!(truncate_to_date("2022-05-26"), "2022-05-26");
/// ```
pub fn truncate_to_date(s: &str) -> &str {
    match s.find('T') {
        Some(t_pos) => &s[..t_pos],
        None => s,
    }
}

/// Format a `YYYY-MM-DD` date (or ISO timestamp) for display, e.g.
/// `2024年5月1日(水)`.
///
/// Empty input gives an empty string; anything unparseable is returned as is.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(truncate_to_date(date), "%Y-%m-%d") {
        Ok(parsed) => format!(
            "{}年{}月{}日({})",
            parsed.year(),
            parsed.month(),
            parsed.day(),
            weekday_short(parsed.weekday())
        ),
        Err(_) => date.to_string(),
    }
}

fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}
