//! Workbook decoding for attendance uploads.
//!
//! Reads an uploaded `.xlsx` byte buffer into typed raw rows. The first
//! sheet is the table; its header row is matched by the exact column keys
//! `Employee Name`, `Date`, `In-Time`, and `Out-Time`. Cells are carried
//! raw - date cells as [`DateInput`], time cells as text - so the
//! classifier owns all interpretation.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::calculation::DateInput;
use crate::error::{EngineError, EngineResult};

/// Header key for the employee name column.
pub const COL_EMPLOYEE_NAME: &str = "Employee Name";
/// Header key for the date column.
pub const COL_DATE: &str = "Date";
/// Header key for the in-punch column.
pub const COL_IN_TIME: &str = "In-Time";
/// Header key for the out-punch column.
pub const COL_OUT_TIME: &str = "Out-Time";

/// One data row of the uploaded table, before classification.
///
/// Every field except the row number is optional: absence here is what
/// the classifier turns into skips, leaves, and zero-hour days.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based row number in the sheet, header included (first data row
    /// is 2). Used in skip and warning reports.
    pub row_number: u32,
    /// The employee name cell, absent when empty.
    pub employee_name: Option<String>,
    /// The date cell in whichever shape the sheet carried it.
    pub date: Option<DateInput>,
    /// The in-punch cell as text, absent when empty.
    pub in_time: Option<String>,
    /// The out-punch cell as text, absent when empty.
    pub out_time: Option<String>,
}

/// Decodes the first sheet of an `.xlsx` buffer into raw rows.
///
/// # Errors
///
/// [`EngineError::WorkbookRead`] when the buffer is not a readable
/// workbook or has no sheets; [`EngineError::EmptySheet`] when the sheet
/// holds no data rows below the header.
pub fn read_workbook(bytes: &[u8]) -> EngineResult<Vec<RawRow>> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| EngineError::WorkbookRead {
            message: e.to_string(),
        })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| EngineError::WorkbookRead {
            message: "workbook has no sheets".to_string(),
        })?
        .map_err(|e| EngineError::WorkbookRead {
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header = rows.next().ok_or(EngineError::EmptySheet)?;

    let name_col = find_column(header, COL_EMPLOYEE_NAME);
    let date_col = find_column(header, COL_DATE);
    let in_col = find_column(header, COL_IN_TIME);
    let out_col = find_column(header, COL_OUT_TIME);

    let raw_rows: Vec<RawRow> = rows
        .enumerate()
        .map(|(index, row)| RawRow {
            row_number: index as u32 + 2,
            employee_name: name_col.and_then(|c| cell_text(row.get(c))),
            date: date_col.and_then(|c| cell_date(row.get(c))),
            in_time: in_col.and_then(|c| cell_text(row.get(c))),
            out_time: out_col.and_then(|c| cell_text(row.get(c))),
        })
        .collect();

    if raw_rows.is_empty() {
        return Err(EngineError::EmptySheet);
    }

    Ok(raw_rows)
}

/// Finds the index of an exactly-matching header cell.
fn find_column(header: &[Data], name: &str) -> Option<usize> {
    header.iter().position(|cell| match cell {
        Data::String(s) => s == name,
        _ => false,
    })
}

/// Carries a cell as display text; empty and error cells are absent.
///
/// Numeric cells stringify, matching the upstream convention that a time
/// cell may arrive as a number and then fail clock parsing downstream.
fn cell_text(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::Empty | Data::Bool(_) | Data::Error(_) => None,
    }
}

/// Carries a date cell in its raw shape for the decoder.
fn cell_date(cell: Option<&Data>) -> Option<DateInput> {
    match cell? {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| DateInput::Text(trimmed.to_string()))
        }
        Data::Float(f) => Some(DateInput::Serial(*f)),
        Data::Int(i) => Some(DateInput::Serial(*i as f64)),
        Data::DateTime(dt) => Some(DateInput::Serial(dt.as_f64())),
        Data::Empty | Data::Bool(_) | Data::Error(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn sheet_bytes(rows: &[[Option<&str>; 4]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, COL_EMPLOYEE_NAME).unwrap();
        sheet.write_string(0, 1, COL_DATE).unwrap();
        sheet.write_string(0, 2, COL_IN_TIME).unwrap();
        sheet.write_string(0, 3, COL_OUT_TIME).unwrap();

        for (i, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                if let Some(value) = value {
                    sheet
                        .write_string(i as u32 + 1, col as u16, *value)
                        .unwrap();
                }
            }
        }

        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_reads_text_rows() {
        let bytes = sheet_bytes(&[
            [Some("Alice"), Some("2024-03-04"), Some("09:00"), Some("18:00")],
            [Some("Bob"), Some("2024-03-04"), Some("09:00"), None],
        ]);

        let rows = read_workbook(&bytes).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].employee_name.as_deref(), Some("Alice"));
        assert_eq!(
            rows[0].date,
            Some(DateInput::Text("2024-03-04".to_string()))
        );
        assert_eq!(rows[0].in_time.as_deref(), Some("09:00"));
        assert_eq!(rows[0].out_time.as_deref(), Some("18:00"));

        assert_eq!(rows[1].row_number, 3);
        assert!(rows[1].out_time.is_none());
    }

    #[test]
    fn test_numeric_date_cell_becomes_serial() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, COL_EMPLOYEE_NAME).unwrap();
        sheet.write_string(0, 1, COL_DATE).unwrap();
        sheet.write_string(0, 2, COL_IN_TIME).unwrap();
        sheet.write_string(0, 3, COL_OUT_TIME).unwrap();
        sheet.write_string(1, 0, "Alice").unwrap();
        sheet.write_number(1, 1, 45_355.0).unwrap();
        sheet.write_string(1, 2, "09:00").unwrap();
        sheet.write_string(1, 3, "18:00").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let rows = read_workbook(&bytes).unwrap();
        assert_eq!(rows[0].date, Some(DateInput::Serial(45_355.0)));
    }

    #[test]
    fn test_header_only_sheet_is_empty() {
        let bytes = sheet_bytes(&[]);
        assert!(matches!(read_workbook(&bytes), Err(EngineError::EmptySheet)));
    }

    #[test]
    fn test_garbage_bytes_fail_as_workbook_read() {
        let result = read_workbook(b"this is not a workbook");
        assert!(matches!(result, Err(EngineError::WorkbookRead { .. })));
    }

    #[test]
    fn test_missing_columns_leave_fields_absent() {
        // Sheet with only a name column; rows survive but carry no date.
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, COL_EMPLOYEE_NAME).unwrap();
        sheet.write_string(1, 0, "Alice").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let rows = read_workbook(&bytes).unwrap();
        assert_eq!(rows[0].employee_name.as_deref(), Some("Alice"));
        assert!(rows[0].date.is_none());
        assert!(rows[0].in_time.is_none());
    }

    #[test]
    fn test_whitespace_cells_are_absent() {
        let bytes = sheet_bytes(&[[Some("  "), Some("2024-03-04"), Some(" "), None]]);
        let rows = read_workbook(&bytes).unwrap();
        assert!(rows[0].employee_name.is_none());
        assert!(rows[0].in_time.is_none());
    }
}
