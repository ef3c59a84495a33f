use chrono::NaiveDateTime;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Format $ amount. NaN is shown as is so a corrupted total is visible.
pub(crate) fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        "NaN".to_string()
    } else {
        format!("{amount:.2}")
    }
}

pub(crate) fn format_date(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// English name of a 1-based month
pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[month as usize - 1],
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(170.0), "170.00");
        assert_eq!(format_amount(-12.5), "-12.50");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_date(date), "2024-03-05 09:05:00");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(month_name(13), "Unknown");
    }
}
