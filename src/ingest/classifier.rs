//! Row classification and batch processing.
//!
//! Turns raw upload rows into persisted-shape attendance records. Every
//! row resolves to an explicit [`RowOutcome`] - processed, skipped with a
//! reason, or degraded with a warning - so the batch summary can surface
//! what happened to each row instead of silently absorbing bad data. A
//! bad row never aborts the batch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DayType, calculate_worked_hours, day_type_for, decode_excel_date};
use crate::models::AttendanceRecord;
use crate::store::{AttendanceStore, AttendanceUpdate};

use super::workbook::RawRow;

/// A raw row classified into the persisted record shape, before ids are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRow {
    /// The employee name, matched or created exactly as uploaded.
    pub employee_name: String,
    /// The decoded calendar date.
    pub date: chrono::NaiveDate,
    /// The raw in-punch, absent when the cell was empty.
    pub in_time: Option<String>,
    /// The raw out-punch, absent when the cell was empty.
    pub out_time: Option<String>,
    /// Hours worked, zero on leave days.
    pub worked_hours: Decimal,
    /// Whether the day counts as a leave.
    pub is_leave: bool,
    /// The day type derived from the date.
    pub day_type: DayType,
}

/// Why a row was dropped from the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The employee name cell was empty.
    MissingEmployeeName,
    /// The date cell was empty.
    MissingDate,
    /// The date cell was present but could not be decoded.
    UndecodableDate,
}

/// A dropped row and the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based sheet row number.
    pub row: u32,
    /// Why the row was dropped.
    pub reason: SkipReason,
}

/// A non-fatal anomaly on a row that was still persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWarning {
    /// 1-based sheet row number.
    pub row: u32,
    /// Human-readable description of the anomaly.
    pub message: String,
}

/// The outcome of classifying one raw row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// The row classified cleanly and should be persisted.
    Processed(ClassifiedRow),
    /// The row was dropped and must not be persisted.
    Skipped(SkippedRow),
    /// The row is persisted with degraded values (zero worked hours) and
    /// a warning describing why.
    Degraded(ClassifiedRow, RowWarning),
}

/// Classifies a single raw row.
///
/// Rules, in order: a row without an employee name or date is skipped; an
/// undecodable date skips the row; the day type comes from the date;
/// leave means a working day (not Sunday) missing either punch; worked
/// hours are zero on leave days and otherwise come from the interval
/// calculator, with an unparseable punch degrading to zero hours plus a
/// warning rather than failing the row.
pub fn classify_row(row: &RawRow) -> RowOutcome {
    let Some(employee_name) = row.employee_name.as_deref() else {
        return RowOutcome::Skipped(SkippedRow {
            row: row.row_number,
            reason: SkipReason::MissingEmployeeName,
        });
    };

    let Some(raw_date) = row.date.as_ref() else {
        return RowOutcome::Skipped(SkippedRow {
            row: row.row_number,
            reason: SkipReason::MissingDate,
        });
    };

    let date = match decode_excel_date(raw_date) {
        Ok(date) => date,
        Err(_) => {
            return RowOutcome::Skipped(SkippedRow {
                row: row.row_number,
                reason: SkipReason::UndecodableDate,
            });
        }
    };

    let day_type = day_type_for(date);

    // Sunday is never a leave, whatever the punches say.
    let is_leave =
        day_type.is_working_day() && (row.in_time.is_none() || row.out_time.is_none());

    let classified = |worked_hours| ClassifiedRow {
        employee_name: employee_name.to_string(),
        date,
        in_time: row.in_time.clone(),
        out_time: row.out_time.clone(),
        worked_hours,
        is_leave,
        day_type,
    };

    if is_leave {
        return RowOutcome::Processed(classified(Decimal::ZERO));
    }

    match calculate_worked_hours(row.in_time.as_deref(), row.out_time.as_deref()) {
        Ok(worked_hours) => RowOutcome::Processed(classified(worked_hours)),
        Err(error) => RowOutcome::Degraded(
            classified(Decimal::ZERO),
            RowWarning {
                row: row.row_number,
                message: error.to_string(),
            },
        ),
    }
}

/// The result of processing one upload batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows persisted, degraded rows included; skipped rows are not
    /// counted.
    pub processed: usize,
    /// Rows dropped, in sheet order.
    pub skipped: Vec<SkippedRow>,
    /// Warnings for persisted rows, in sheet order.
    pub warnings: Vec<RowWarning>,
}

/// Processes a batch of raw rows against the store.
///
/// Rows are handled strictly sequentially in sheet order, so when one
/// batch carries several rows for the same employee and date the last
/// occurrence wins. Each surviving row upserts its employee (created on
/// first appearance) and fully replaces the attendance record at
/// (employee, date).
pub fn process_rows(rows: &[RawRow], store: &AttendanceStore) -> BatchSummary {
    let mut summary = BatchSummary {
        processed: 0,
        skipped: Vec::new(),
        warnings: Vec::new(),
    };

    for raw in rows {
        let classified = match classify_row(raw) {
            RowOutcome::Processed(classified) => classified,
            RowOutcome::Skipped(skipped) => {
                summary.skipped.push(skipped);
                continue;
            }
            RowOutcome::Degraded(classified, warning) => {
                summary.warnings.push(warning);
                classified
            }
        };

        persist(&classified, store);
        summary.processed += 1;
    }

    summary
}

fn persist(row: &ClassifiedRow, store: &AttendanceStore) -> AttendanceRecord {
    let employee = store.upsert_employee(&row.employee_name);
    store.upsert_attendance(
        employee.id,
        AttendanceUpdate {
            date: row.date,
            in_time: row.in_time.clone(),
            out_time: row.out_time.clone(),
            worked_hours: row.worked_hours,
            is_leave: row.is_leave,
            day_type: row.day_type,
        },
    )
}
