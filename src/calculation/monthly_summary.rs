//! Monthly aggregation logic.
//!
//! Rolls a month of classified attendance records into a
//! [`MonthlyAnalytics`] summary. The expected-hours total is derived from
//! the calendar alone - it is the policy target for the month, independent
//! of which records were actually uploaded. Worked hours, leave counts,
//! and the daily breakdown come from the supplied records.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::AttendancePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, DailyAttendance, MonthlyAnalytics};

use super::{day_type_for, round2};

/// Returns the half-open date range `[first of month, first of next month)`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when `month` is outside 1-12.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::month_bounds;
/// use chrono::NaiveDate;
///
/// let (start, end) = month_bounds(2024, 3).unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
///
/// assert!(month_bounds(2024, 13).is_err());
/// ```
pub fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidMonth { month })?;

    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(EngineError::InvalidMonth { month })?;

    Ok((first, next))
}

/// Sums the expected-hours policy over every calendar day of the month.
///
/// This is the monthly policy target: it depends only on the calendar and
/// the injected policy, never on which attendance records exist.
pub fn expected_hours_for_month(
    year: i32,
    month: u32,
    policy: &AttendancePolicy,
) -> EngineResult<Decimal> {
    let (first, next) = month_bounds(year, month)?;

    let mut total = Decimal::ZERO;
    let mut day = first;
    while day < next {
        total += policy.expected_hours(day_type_for(day));
        day = match day.succ_opt() {
            Some(next_day) => next_day,
            None => break,
        };
    }

    Ok(round2(total))
}

/// Builds the monthly analytics summary for one employee.
///
/// `records` must be the employee's attendance records whose date falls in
/// the target month, in ascending date order; the daily breakdown preserves
/// that order. Each breakdown entry carries the *per-day* expected hours
/// looked up from the record's stored day-type, distinct from the monthly
/// total which is calendar-derived.
///
/// The productivity percentage divides worked by expected hours; a zero
/// expected total (possible under an all-zero policy) yields zero rather
/// than a division error.
pub fn build_monthly_analytics(
    employee_name: &str,
    month: u32,
    year: i32,
    records: &[AttendanceRecord],
    policy: &AttendancePolicy,
) -> EngineResult<MonthlyAnalytics> {
    let (first, _) = month_bounds(year, month)?;

    let total_expected_hours = expected_hours_for_month(year, month, policy)?;

    let total_worked_hours = round2(records.iter().map(|r| r.worked_hours).sum());

    let leaves_used = records.iter().filter(|r| r.is_leave).count() as u32;

    let productivity_percentage = if total_expected_hours > Decimal::ZERO {
        round2(total_worked_hours / total_expected_hours * Decimal::new(100, 0))
    } else {
        Decimal::ZERO
    };

    let daily_breakdown = records
        .iter()
        .map(|record| DailyAttendance {
            date: record.date.format("%Y-%m-%d").to_string(),
            day_of_week: record.date.format("%A").to_string(),
            in_time: record.display_in_time(),
            out_time: record.display_out_time(),
            worked_hours: record.worked_hours,
            expected_hours: policy.expected_hours(record.day_type),
            is_leave: record.is_leave,
            day_type: record.day_type,
        })
        .collect();

    Ok(MonthlyAnalytics {
        employee_name: employee_name.to_string(),
        month: first.format("%B").to_string(),
        year,
        total_expected_hours,
        total_worked_hours,
        leaves_used,
        leaves_allowed: policy.leaves_allowed,
        productivity_percentage,
        daily_breakdown,
    })
}
