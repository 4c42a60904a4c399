use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Format accepted by [`parse_calendar_date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A strict `YYYY-MM-DD` calendar date.
///
/// Not wired into any current flag; any future date-typed option should use
/// this instead of parsing inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A string failed to parse as a strict `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid date: '{input}'. Format: {format}")]
pub struct DateParseError {
    /// The rejected input, verbatim.
    pub input: String,
    /// The expected format string.
    pub format: &'static str,
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// Strict means exactly ten characters, `-` separators in the two expected
/// positions, zero-padded numeric fields, and a date that exists on the
/// calendar. Anything else fails with the original input preserved, so the
/// message can be embedded in a usage error as-is.
pub fn parse_calendar_date(input: &str) -> Result<CalendarDate, DateParseError> {
    let err = || DateParseError {
        input: input.to_string(),
        format: DATE_FORMAT,
    };

    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(err());
    }
    let (year_s, month_s, day_s) = (&input[..4], &input[5..7], &input[8..]);
    if !year_s.bytes().all(|b| b.is_ascii_digit())
        || !month_s.bytes().all(|b| b.is_ascii_digit())
        || !day_s.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(err());
    }

    let year: i32 = year_s.parse().map_err(|_| err())?;
    let month: u32 = month_s.parse().map_err(|_| err())?;
    let day: u32 = day_s.parse().map_err(|_| err())?;

    // Shape is right; chrono decides whether the date actually exists.
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)?;

    Ok(CalendarDate { year, month, day })
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_calendar_date(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_date_parses() {
        let date = parse_calendar_date("2023-02-28").unwrap();
        assert_eq!(date.year, 2023);
        assert_eq!(date.month, 2);
        assert_eq!(date.day, 28);
    }

    #[test]
    fn impossible_calendar_date_fails() {
        assert!(parse_calendar_date("2023-02-30").is_err());
    }

    #[test]
    fn wrong_field_order_fails() {
        assert!(parse_calendar_date("02-28-2023").is_err());
    }

    #[test]
    fn alternate_separators_fail() {
        assert!(parse_calendar_date("2023/02/28").is_err());
        assert!(parse_calendar_date("2023.02.28").is_err());
    }

    #[test]
    fn partial_and_padded_inputs_fail() {
        assert!(parse_calendar_date("2023-2-28").is_err());
        assert!(parse_calendar_date("2023-02-28 ").is_err());
        assert!(parse_calendar_date(" 2023-02-28").is_err());
        assert!(parse_calendar_date("2023-02-281").is_err());
        assert!(parse_calendar_date("").is_err());
    }

    #[test]
    fn leap_day_is_calendar_checked() {
        assert!(parse_calendar_date("2024-02-29").is_ok());
        assert!(parse_calendar_date("2023-02-29").is_err());
    }

    #[test]
    fn error_carries_input_and_format() {
        let err = parse_calendar_date("nope").unwrap_err();
        assert_eq!(err.input, "nope");
        assert_eq!(err.format, "%Y-%m-%d");
        assert_eq!(
            err.to_string(),
            "not a valid date: 'nope'. Format: %Y-%m-%d"
        );
    }

    #[test]
    fn from_str_and_display_round() {
        let date: CalendarDate = "2023-02-28".parse().unwrap();
        assert_eq!(date.to_string(), "2023-02-28");
    }
}
