//! Policy configuration types.
//!
//! The attendance policy is the single source of truth for how many hours
//! are expected on each day type and how many leaves a month allows. It is
//! injected into classification and aggregation rather than embedded as
//! literals, so policy can vary per test or deployment without code change.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::DayType;

/// Expected working hours by day type plus the monthly leave entitlement.
///
/// [`AttendancePolicy::default`] carries the stock policy: 8.5 hours on
/// weekdays, a 4-hour half day on Saturdays, Sundays off, and 2 allowed
/// leaves per month.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendancePolicy;
/// use attendance_engine::calculation::DayType;
/// use rust_decimal::Decimal;
///
/// let policy = AttendancePolicy::default();
/// assert_eq!(policy.expected_hours(DayType::Weekday), Decimal::new(85, 1));
/// assert_eq!(policy.expected_hours(DayType::Saturday), Decimal::new(4, 0));
/// assert_eq!(policy.expected_hours(DayType::Sunday), Decimal::ZERO);
/// assert_eq!(policy.leaves_allowed, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendancePolicy {
    /// Expected hours on a weekday.
    pub weekday_hours: Decimal,
    /// Expected hours on a Saturday.
    pub saturday_hours: Decimal,
    /// Expected hours on a Sunday.
    pub sunday_hours: Decimal,
    /// Number of leaves allowed per month.
    pub leaves_allowed: u32,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            weekday_hours: Decimal::new(85, 1),
            saturday_hours: Decimal::new(4, 0),
            sunday_hours: Decimal::ZERO,
            leaves_allowed: 2,
        }
    }
}

impl AttendancePolicy {
    /// Returns the expected hours for a day type.
    pub fn expected_hours(&self, day_type: DayType) -> Decimal {
        match day_type {
            DayType::Weekday => self.weekday_hours,
            DayType::Saturday => self.saturday_hours,
            DayType::Sunday => self.sunday_hours,
        }
    }
}
