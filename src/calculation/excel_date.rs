//! Spreadsheet date decoding.
//!
//! Upload cells carry dates in three shapes: a native calendar date, a
//! numeric day-serial, or a free-form string. This module normalizes all
//! three into a [`chrono::NaiveDate`], failing with a typed error instead
//! of letting an invalid date propagate downstream.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::DecodeError;

/// The day-serial epoch: serial 0 is 1899-12-30.
///
/// This epoch choice absorbs the spreadsheet leap-year-1900 quirk, so
/// serial N maps directly to epoch + N days.
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Milliseconds per serial day.
const MS_PER_DAY: f64 = 86_400_000.0;

/// Date formats attempted for free-form string cells, in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Datetime formats attempted for free-form string cells, in order.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A raw date value as read from an upload cell.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// A native calendar date; passes through unchanged.
    Date(NaiveDate),
    /// A numeric day-serial relative to the 1899-12-30 epoch.
    Serial(f64),
    /// A free-form date string.
    Text(String),
}

/// Decodes a raw spreadsheet date value into a calendar date.
///
/// Native dates pass through unchanged. Serials are converted as
/// serial × 86,400,000 ms added to the 1899-12-30 epoch, so fractional
/// serials land on the containing day. Strings are tried against a fixed
/// format list and fail with [`DecodeError::UnparseableDate`] when nothing
/// matches; callers decide whether to skip the row.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{decode_excel_date, DateInput};
/// use chrono::NaiveDate;
///
/// // Serial 1 is one day after the 1899-12-30 epoch.
/// let date = decode_excel_date(&DateInput::Serial(1.0)).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(1899, 12, 31).unwrap());
///
/// let date = decode_excel_date(&DateInput::Text("2024-03-04".to_string())).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
///
/// assert!(decode_excel_date(&DateInput::Text("soon".to_string())).is_err());
/// ```
pub fn decode_excel_date(input: &DateInput) -> Result<NaiveDate, DecodeError> {
    match input {
        DateInput::Date(date) => Ok(*date),
        DateInput::Serial(serial) => decode_serial(*serial),
        DateInput::Text(text) => decode_text(text),
    }
}

fn decode_serial(serial: f64) -> Result<NaiveDate, DecodeError> {
    if !serial.is_finite() {
        return Err(DecodeError::SerialOutOfRange { serial });
    }

    let (y, m, d) = SERIAL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("serial epoch is a valid datetime");

    let millis = (serial * MS_PER_DAY).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(DecodeError::SerialOutOfRange { serial });
    }

    epoch
        .checked_add_signed(TimeDelta::milliseconds(millis as i64))
        .map(|datetime| datetime.date())
        .ok_or(DecodeError::SerialOutOfRange { serial })
}

fn decode_text(text: &str) -> Result<NaiveDate, DecodeError> {
    let trimmed = text.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    Err(DecodeError::UnparseableDate {
        value: text.to_string(),
    })
}
