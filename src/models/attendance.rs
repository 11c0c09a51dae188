//! Attendance record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::DayType;

/// Sentinel shown in place of an absent punch time.
pub const MISSING_TIME: &str = "-";

/// A persisted attendance record for one employee on one date.
///
/// At most one record exists per (employee, date); re-ingesting the same
/// date fully replaces the previous values. The day type is a pure
/// function of the date and is never mutated independently, and a record
/// flagged as leave always carries zero worked hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: Uuid,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The raw in-punch as uploaded, absent when the cell was empty.
    pub in_time: Option<String>,
    /// The raw out-punch as uploaded, absent when the cell was empty.
    pub out_time: Option<String>,
    /// Hours worked on this date, non-negative with 2-decimal precision.
    pub worked_hours: Decimal,
    /// Whether this working day counts as a leave.
    pub is_leave: bool,
    /// The day type derived from the date.
    pub day_type: DayType,
}

impl AttendanceRecord {
    /// The in-punch for display, with `"-"` standing in for absence.
    pub fn display_in_time(&self) -> String {
        self.in_time.clone().unwrap_or_else(|| MISSING_TIME.to_string())
    }

    /// The out-punch for display, with `"-"` standing in for absence.
    pub fn display_out_time(&self) -> String {
        self.out_time.clone().unwrap_or_else(|| MISSING_TIME.to_string())
    }
}
