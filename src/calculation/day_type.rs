//! Day classification logic.
//!
//! This module provides the day-type categories used for expected-hours
//! policy lookup and leave classification, and the function that maps a
//! calendar date onto them.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for expected-hours policy lookup.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(day_type.to_string(), "saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday - full expected hours apply.
    Weekday,
    /// Saturday - a reduced half-day expectation applies.
    Saturday,
    /// Sunday - a non-working day, zero expected hours.
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "weekday"),
            DayType::Saturday => write!(f, "saturday"),
            DayType::Sunday => write!(f, "sunday"),
        }
    }
}

impl DayType {
    /// Returns true for days on which attendance is expected.
    ///
    /// Sundays are the only non-working days; a missing punch on a Sunday
    /// is never counted as leave.
    pub fn is_working_day(self) -> bool {
        self != DayType::Sunday
    }
}

/// Determines the day type for a given calendar date.
///
/// Pure and total: every date maps to exactly one [`DayType`] based only
/// on its day of the week.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{day_type_for, DayType};
/// use chrono::NaiveDate;
///
/// // 2024-03-04 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// assert_eq!(day_type_for(monday), DayType::Weekday);
///
/// // 2024-03-09 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(day_type_for(saturday), DayType::Saturday);
///
/// // 2024-03-10 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// assert_eq!(day_type_for(sunday), DayType::Sunday);
/// ```
pub fn day_type_for(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_monday_is_weekday() {
        // 2024-03-04 is a Monday
        assert_eq!(day_type_for(make_date("2024-03-04")), DayType::Weekday);
    }

    #[test]
    fn test_tuesday_through_friday_are_weekdays() {
        assert_eq!(day_type_for(make_date("2024-03-05")), DayType::Weekday);
        assert_eq!(day_type_for(make_date("2024-03-06")), DayType::Weekday);
        assert_eq!(day_type_for(make_date("2024-03-07")), DayType::Weekday);
        assert_eq!(day_type_for(make_date("2024-03-08")), DayType::Weekday);
    }

    #[test]
    fn test_saturday_is_saturday() {
        // 2024-03-09 is a Saturday
        assert_eq!(day_type_for(make_date("2024-03-09")), DayType::Saturday);
    }

    #[test]
    fn test_sunday_is_sunday() {
        // 2024-03-10 is a Sunday
        assert_eq!(day_type_for(make_date("2024-03-10")), DayType::Sunday);
    }

    #[test]
    fn test_only_sunday_is_non_working() {
        assert!(DayType::Weekday.is_working_day());
        assert!(DayType::Saturday.is_working_day());
        assert!(!DayType::Sunday.is_working_day());
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(DayType::Weekday.to_string(), "weekday");
        assert_eq!(DayType::Saturday.to_string(), "saturday");
        assert_eq!(DayType::Sunday.to_string(), "sunday");
    }

    #[test]
    fn test_day_type_serialization() {
        let saturday = DayType::Saturday;
        let json = serde_json::to_string(&saturday).unwrap();
        assert_eq!(json, "\"saturday\"");

        let deserialized: DayType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayType::Saturday);
    }

    proptest! {
        // Total and stable: any representable date classifies, and the
        // classification depends only on the day of the week.
        #[test]
        fn prop_classification_matches_weekday(days in 0i64..80_000) {
            let date = make_date("1900-01-01") + chrono::Duration::days(days);
            let day_type = day_type_for(date);
            match date.weekday() {
                Weekday::Sat => prop_assert_eq!(day_type, DayType::Saturday),
                Weekday::Sun => prop_assert_eq!(day_type, DayType::Sunday),
                _ => prop_assert_eq!(day_type, DayType::Weekday),
            }
            // Same day-of-week one week later classifies identically.
            prop_assert_eq!(day_type, day_type_for(date + chrono::Duration::weeks(1)));
        }
    }
}
