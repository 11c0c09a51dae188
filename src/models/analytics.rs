//! Derived monthly analytics shapes.
//!
//! These are computed per request and never persisted. Field names follow
//! the report wire contract, camelCase on the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;

/// The monthly productivity summary for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAnalytics {
    /// The employee's name.
    pub employee_name: String,
    /// Full month name, e.g. "March".
    pub month: String,
    /// The target year.
    pub year: i32,
    /// Calendar-derived policy target for the month, 2-decimal precision.
    pub total_expected_hours: Decimal,
    /// Sum of worked hours over the month's records, 2-decimal precision.
    pub total_worked_hours: Decimal,
    /// Number of records flagged as leave.
    pub leaves_used: u32,
    /// The policy's monthly leave entitlement.
    pub leaves_allowed: u32,
    /// Worked over expected hours as a percentage, 0 when nothing was
    /// expected.
    pub productivity_percentage: Decimal,
    /// One entry per stored record in the month, ascending by date.
    pub daily_breakdown: Vec<DailyAttendance>,
}

/// One day's entry in the monthly breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAttendance {
    /// Display date, `YYYY-MM-DD`.
    pub date: String,
    /// Full weekday name, e.g. "Monday".
    pub day_of_week: String,
    /// The in-punch, or `"-"` when absent.
    pub in_time: String,
    /// The out-punch, or `"-"` when absent.
    pub out_time: String,
    /// Hours worked on this date.
    pub worked_hours: Decimal,
    /// Expected hours for this record's stored day type.
    pub expected_hours: Decimal,
    /// Whether the day counts as a leave.
    pub is_leave: bool,
    /// The record's day type.
    pub day_type: DayType,
}
