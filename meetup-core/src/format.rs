//! Display formatting for the date and time strings events arrive with.
//!
//! Nothing here fails: input that cannot be parsed is handed back unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMAT: &str = "%d %b %Y";
const TIME_FORMAT: &str = "%I:%M %p";
const LONG_DATE_TIME_FORMAT: &str = "%B %-d, %Y at %I:%M %p";

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a full timestamp. Offsets are kept as sent, so the wall-clock time
/// is the one the event was published with.
fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parses a bare clock time such as `14:30`, `9:05` or `14:30:15`.
fn parse_clock(input: &str) -> Option<NaiveTime> {
    let mut parts = input.split(':');
    let hour = parts.next()?.trim().parse::<u32>().ok()?;
    let minute = parts.next()?.trim().parse::<u32>().ok()?;
    let second = match parts.next() {
        Some(second) => second.trim().parse::<u32>().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// `2024-05-01T09:00:00Z` becomes `01 May 2024`.
pub fn format_date(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_timestamp(trimmed) {
        Some(dt) => dt.format(DATE_FORMAT).to_string(),
        None => input.to_string(),
    }
}

/// Renders a timestamp or a bare `HH:MM` as a 12-hour clock, `02:30 PM`.
pub fn format_time(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Some(dt) = parse_timestamp(trimmed) {
        return dt.format(TIME_FORMAT).to_string();
    }
    match parse_clock(trimmed) {
        Some(time) => time.format(TIME_FORMAT).to_string(),
        None => input.to_string(),
    }
}

pub fn format_time_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_time(start), format_time(end))
}

/// Card style used on the list page: `May 1, 2024 at 09:00 AM`.
pub fn format_date_time(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_timestamp(trimmed) {
        Some(dt) => dt.format(LONG_DATE_TIME_FORMAT).to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_bare_clock() {
        assert_eq!(format_time("14:30"), "02:30 PM");
        assert_eq!(format_time("9:05"), "09:05 AM");
        assert_eq!(format_time("00:00"), "12:00 AM");
        assert_eq!(format_time("12:00"), "12:00 PM");
        assert_eq!(format_time("18:45:10"), "06:45 PM");
    }

    #[test]
    fn test_format_time_timestamp() {
        assert_eq!(format_time("2024-05-01T09:00:00Z"), "09:00 AM");
        assert_eq!(format_time("2024-05-01T21:15:00+05:30"), "09:15 PM");
        assert_eq!(format_time("2024-05-01T13:05:00"), "01:05 PM");
    }

    #[test]
    fn test_format_time_unparsable_is_verbatim() {
        assert_eq!(format_time("soon"), "soon");
        assert_eq!(format_time("25:00"), "25:00");
        assert_eq!(format_time("10:30:00:00"), "10:30:00:00");
        assert_eq!(format_time(""), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-01T09:00:00Z"), "01 May 2024");
        assert_eq!(format_date("2024-12-25"), "25 Dec 2024");
        assert_eq!(format_date("2023-07-04T18:30:00.000Z"), "04 Jul 2023");
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date("   "), "");
    }

    #[test]
    fn test_format_date_time_long() {
        assert_eq!(
            format_date_time("2024-05-01T09:00:00Z"),
            "May 1, 2024 at 09:00 AM"
        );
        assert_eq!(
            format_date_time("2024-11-15 18:00"),
            "November 15, 2024 at 06:00 PM"
        );
        assert_eq!(format_date_time("TBA"), "TBA");
    }

    #[test]
    fn test_format_time_range() {
        assert_eq!(format_time_range("09:00", "12:00"), "09:00 AM - 12:00 PM");
        assert_eq!(format_time_range("13:30", "later"), "01:30 PM - later");
    }
}
