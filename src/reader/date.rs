use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YYYY_MM_DD: Regex = Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").unwrap();

    /// Date and time separated by 'T' or a space. Fractional seconds and zone are optional, zone is dropped.
    static ref YYYY_MM_DD_HHMMSS: Regex = Regex::new(
        r"^(\d{4}-\d{1,2}-\d{1,2})[T ](\d{2}:\d{2})(:\d{2}(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?$").unwrap();

    static ref DD_MM_YYYY: Regex = Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap();

    static ref D_MMM_YYYY: Regex = Regex::new(r"^\d{1,2} [a-zA-Z]{3} \d{4}$").unwrap();
}

/// Parse a date string in one of the built-in formats, then any of `extra_formats`.
/// Dates without a time part are at midnight. Zone offsets are discarded and the wall time kept.
pub(crate) fn parse_date(s: &str, extra_formats: &[String]) -> Option<NaiveDateTime> {
    let s = s.trim();

    let parsed = if YYYY_MM_DD.is_match(s) {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(midnight)
    } else if let Some(captures) = YYYY_MM_DD_HHMMSS.captures(s) {
        let seconds = captures.get(3).map_or(":00", |m| m.as_str());
        let date_time = format!("{} {}{}", &captures[1], &captures[2], seconds);
        NaiveDateTime::parse_from_str(&date_time, "%Y-%m-%d %H:%M:%S%.f").ok()
    } else if DD_MM_YYYY.is_match(s) {
        NaiveDate::parse_from_str(s, "%d/%m/%Y").ok().and_then(midnight)
    } else if D_MMM_YYYY.is_match(s) {
        NaiveDate::parse_from_str(s, "%d %b %Y").ok().and_then(midnight)
    } else {
        None
    };

    parsed.or_else(|| parse_with_formats(s, extra_formats))
}

/// Milliseconds since unix epoch, as UTC wall time
pub(crate) fn from_epoch_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|d| d.naive_utc())
}

fn parse_with_formats(s: &str, formats: &[String]) -> Option<NaiveDateTime> {
    for format in formats {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(s, format) {
            return Some(date_time);
        }
        if let Some(date_time) = NaiveDate::parse_from_str(s, format).ok().and_then(midnight) {
            return Some(date_time);
        }
    }

    None
}

fn midnight(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, sec).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-05", &[]), Some(ymd_hms(2024, 3, 5, 0, 0, 0)));
        assert_eq!(parse_date(" 2024-3-5 ", &[]), Some(ymd_hms(2024, 3, 5, 0, 0, 0)));
        assert_eq!(parse_date("2024-03-05T17:30:45", &[]), Some(ymd_hms(2024, 3, 5, 17, 30, 45)));
        assert_eq!(parse_date("2024-03-05 17:30:45", &[]), Some(ymd_hms(2024, 3, 5, 17, 30, 45)));
        assert_eq!(parse_date("2024-03-05T17:30", &[]), Some(ymd_hms(2024, 3, 5, 17, 30, 0)));
        assert_eq!(parse_date("2024-03-05T17:30:45Z", &[]), Some(ymd_hms(2024, 3, 5, 17, 30, 45)));
        assert_eq!(parse_date("2024-03-05T17:30:45+10:00", &[]), Some(ymd_hms(2024, 3, 5, 17, 30, 45)));
        assert_eq!(parse_date("05/03/2024", &[]), Some(ymd_hms(2024, 3, 5, 0, 0, 0)));
        assert_eq!(parse_date("5 Mar 2024", &[]), Some(ymd_hms(2024, 3, 5, 0, 0, 0)));

        let with_millis = parse_date("2024-03-05T17:30:45.250Z", &[]).unwrap();
        assert_eq!(with_millis.and_utc().timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_invalid_date() {
        assert_eq!(parse_date("", &[]), None);
        assert_eq!(parse_date("yesterday", &[]), None);
        assert_eq!(parse_date("2024-13-45", &[]), None);
        assert_eq!(parse_date("31/02/2024", &[]), None);
    }

    #[test]
    fn test_parse_extra_formats() {
        let formats = vec!["%m/%d/%Y".to_string(), "%d.%m.%Y %H:%M".to_string()];
        // Built-in dd/mm/yyyy wins when it can parse
        assert_eq!(parse_date("05/03/2024", &formats), Some(ymd_hms(2024, 3, 5, 0, 0, 0)));
        // Falls back to mm/dd/yyyy when dd/mm/yyyy is not a valid date
        assert_eq!(parse_date("03/25/2024", &formats), Some(ymd_hms(2024, 3, 25, 0, 0, 0)));
        assert_eq!(parse_date("05.03.2024 09:15", &formats), Some(ymd_hms(2024, 3, 5, 9, 15, 0)));
    }

    #[test]
    fn test_from_epoch_millis() {
        assert_eq!(from_epoch_millis(1_709_596_800_000), Some(ymd_hms(2024, 3, 5, 0, 0, 0)));
    }
}
