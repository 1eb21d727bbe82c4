//! Weekday and minute-of-day time model.
//!
//! All class times are minutes since midnight within a single day,
//! forming half-open intervals `[start, end)`. Days come from a fixed
//! Monday–Sunday enumeration; only Monday–Friday participate in
//! free-day logic.
//!
//! # Time Representation
//! Minute resolution is the finest granularity the catalog provides.
//! Input strings use the `HH:MM` form and are rejected eagerly when
//! malformed rather than propagated into interval comparisons.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Days eligible for the free-day requirement.
///
/// Saturday and Sunday never constrain free-day logic.
pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

impl Weekday {
    /// Whether this day is one of Monday–Friday.
    pub fn is_weekday(self) -> bool {
        !matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

/// Error for unparseable time strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The string is not a valid `HH:MM` time of day.
    #[error("malformed time value '{0}': expected HH:MM")]
    MalformedTimeValue(String),
}

/// Parses an `HH:MM` string into minutes since midnight.
///
/// Hours must be in `0..24` and minutes in `0..60`.
///
/// # Examples
///
/// ```
/// use timetabler::models::parse_time;
///
/// assert_eq!(parse_time("08:30"), Ok(510));
/// assert!(parse_time("25:00").is_err());
/// ```
pub fn parse_time(value: &str) -> Result<i32, TimeError> {
    let malformed = || TimeError::MalformedTimeValue(value.to_string());
    let (hours, minutes) = value.split_once(':').ok_or_else(malformed)?;
    let hours: i32 = hours.parse().map_err(|_| malformed())?;
    let minutes: i32 = minutes.parse().map_err(|_| malformed())?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(malformed());
    }
    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_time(minutes_of_day: i32) -> String {
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}

/// Whether two half-open minute intervals intersect.
///
/// Touching intervals (`a_end == b_start`) do not intersect.
#[inline]
pub fn intervals_overlap(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_valid() {
        assert_eq!(parse_time("00:00"), Ok(0));
        assert_eq!(parse_time("08:30"), Ok(510));
        assert_eq!(parse_time("23:59"), Ok(1439));
    }

    #[test]
    fn test_parse_time_malformed() {
        for bad in ["", "8h30", "24:00", "12:60", "-1:00", "ab:cd", "12"] {
            let err = parse_time(bad).unwrap_err();
            assert_eq!(err, TimeError::MalformedTimeValue(bad.to_string()));
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(510), "08:30");
        assert_eq!(format_time(1439), "23:59");
    }

    #[test]
    fn test_parse_format_agree() {
        assert_eq!(parse_time(&format_time(615)), Ok(615));
    }

    #[test]
    fn test_intervals_overlap() {
        assert!(intervals_overlap(0, 100, 50, 150));
        assert!(intervals_overlap(50, 150, 0, 100));
        assert!(intervals_overlap(0, 100, 20, 80)); // containment
    }

    #[test]
    fn test_intervals_touching_do_not_overlap() {
        assert!(!intervals_overlap(0, 100, 100, 200));
        assert!(!intervals_overlap(100, 200, 0, 100));
        assert!(!intervals_overlap(0, 100, 150, 200));
    }

    #[test]
    fn test_weekday_classification() {
        assert!(Weekday::Monday.is_weekday());
        assert!(Weekday::Friday.is_weekday());
        assert!(!Weekday::Saturday.is_weekday());
        assert!(!Weekday::Sunday.is_weekday());
        assert_eq!(WEEKDAYS.len(), 5);
        assert!(WEEKDAYS.iter().all(|d| d.is_weekday()));
    }
}
