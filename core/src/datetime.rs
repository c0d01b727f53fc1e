//! Date and clock-time formats used by the `date` and `time` parameters.
//!
//! On the wire, dates are `MM-DD-YYYY` and times are 24h `HH:MM`. The parsers
//! here are more lenient so command-line and form input can use either clock.

use chrono::{NaiveDate, NaiveTime};

/// Wire format of the `date` parameter, e.g. `06-28-2024`.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Wire format of the `time` parameter, e.g. `19:06`.
pub const TIME_FORMAT: &str = "%H:%M";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parse `MM-DD-YYYY` or ISO `YYYY-MM-DD`.
pub fn parse_plan_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
}

/// Parse a 24h (`19:06`) or 12h (`7:06pm`, `7:06 PM`) clock time.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    let compact: String = s.split_whitespace().collect::<String>().to_ascii_uppercase();
    if compact.ends_with("AM") || compact.ends_with("PM") {
        NaiveTime::parse_from_str(&compact, "%I:%M%p")
    } else {
        NaiveTime::parse_from_str(&compact, TIME_FORMAT)
    }
}
