//! Time related utils.

use chrono::Utc;

/// A date time in UTC, the only time zone signing works with.
pub type DateTime = chrono::DateTime<Utc>;

/// Take the current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a datetime as the 8-digit date used in credential scopes: `20220313`.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a datetime in ISO 8601 basic format: `20220313T072004Z`.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format() {
        let t = Utc.with_ymd_and_hms(2022, 3, 13, 7, 20, 4).unwrap();

        assert_eq!(format_date(t), "20220313");
        assert_eq!(format_iso8601(t), "20220313T072004Z");
    }
}
