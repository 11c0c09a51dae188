//! Worked-hours interval calculation.
//!
//! Computes the hours worked between an in-punch and an out-punch given as
//! 24-hour `HH:mm` wall-clock strings. Times are compared as naive values
//! on the same nominal day; there is no timezone handling and no wrap to
//! the next day.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::DecodeError;

use super::round2;

/// Computes worked hours from an optional in-time/out-time pair.
///
/// Absence of either punch (including empty or whitespace-only text) means
/// no attendance and yields zero hours; that is the contract, not an
/// error. A punch that is present but not valid `HH:mm` is a
/// [`DecodeError`], which the ingest pipeline degrades to zero hours with
/// a warning. An out-punch earlier than the in-punch clamps to zero.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_worked_hours;
/// use rust_decimal::Decimal;
///
/// let hours = calculate_worked_hours(Some("09:00"), Some("17:30")).unwrap();
/// assert_eq!(hours, Decimal::new(85, 1)); // 8.5
///
/// // Out before in clamps rather than wrapping to the next day.
/// let hours = calculate_worked_hours(Some("17:00"), Some("09:00")).unwrap();
/// assert_eq!(hours, Decimal::ZERO);
///
/// // A missing punch is zero hours, not an error.
/// let hours = calculate_worked_hours(None, Some("17:00")).unwrap();
/// assert_eq!(hours, Decimal::ZERO);
/// ```
pub fn calculate_worked_hours(
    in_time: Option<&str>,
    out_time: Option<&str>,
) -> Result<Decimal, DecodeError> {
    let (in_time, out_time) = match (present(in_time), present(out_time)) {
        (Some(in_time), Some(out_time)) => (in_time, out_time),
        _ => return Ok(Decimal::ZERO),
    };

    let start = parse_clock(in_time)?;
    let end = parse_clock(out_time)?;

    let minutes = (end - start).num_minutes();
    if minutes <= 0 {
        return Ok(Decimal::ZERO);
    }

    Ok(round2(Decimal::new(minutes, 0) / Decimal::new(60, 0)))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_clock(value: &str) -> Result<NaiveTime, DecodeError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| DecodeError::UnparseableTime {
        value: value.to_string(),
    })
}
