use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Source rows carry no year; the dataset pins every contact to 2022.
const CONTACT_YEAR: i32 = 2022;

/// Three-letter English month abbreviations, lower case.
static MONTH_NUMBERS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("may", 5),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ])
});

/// Combine raw `day`/`month` cells into an ISO `YYYY-MM-DD` string.
///
/// The month lookup is case-insensitive; the day is parsed verbatim (no
/// trimming). Anything that does not land on a real calendar date — unknown
/// abbreviation, non-numeric day, day 31 in a 30-day month — is absent
/// rather than an error.
pub fn contact_date(day: Option<&str>, month: Option<&str>) -> Option<String> {
    let month = MONTH_NUMBERS
        .get(month?.to_lowercase().as_str())
        .copied()?;
    let day: u32 = day?.parse().ok()?;
    let date = NaiveDate::from_ymd_opt(CONTACT_YEAR, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_valid_dates_zero_padded() {
        assert_eq!(
            contact_date(Some("15"), Some("Jan")),
            Some("2022-01-15".to_string())
        );
        assert_eq!(
            contact_date(Some("5"), Some("may")),
            Some("2022-05-05".to_string())
        );
        assert_eq!(
            contact_date(Some("05"), Some("DEC")),
            Some("2022-12-05".to_string())
        );
    }

    #[test]
    fn impossible_calendar_dates_are_absent() {
        // April has 30 days
        assert_eq!(contact_date(Some("31"), Some("apr")), None);
        // 2022 is not a leap year
        assert_eq!(contact_date(Some("29"), Some("feb")), None);
        assert_eq!(contact_date(Some("0"), Some("jan")), None);
    }

    #[test]
    fn unrecognized_month_is_absent() {
        assert_eq!(contact_date(Some("15"), Some("xyz")), None);
        assert_eq!(contact_date(Some("15"), Some("january")), None);
        assert_eq!(contact_date(Some("15"), Some("")), None);
    }

    #[test]
    fn unparseable_day_is_absent() {
        assert_eq!(contact_date(Some("first"), Some("jan")), None);
        assert_eq!(contact_date(Some(""), Some("jan")), None);
        assert_eq!(contact_date(Some("-1"), Some("jan")), None);
    }

    #[test]
    fn absent_inputs_are_absent() {
        assert_eq!(contact_date(None, Some("jan")), None);
        assert_eq!(contact_date(Some("15"), None), None);
        assert_eq!(contact_date(None, None), None);
    }
}
