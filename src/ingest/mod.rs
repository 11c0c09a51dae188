//! Upload ingestion pipeline.
//!
//! Workbook decoding, per-row classification, and sequential batch
//! processing with explicit per-row outcomes.

mod classifier;
mod workbook;

pub use classifier::{
    BatchSummary, ClassifiedRow, RowOutcome, RowWarning, SkipReason, SkippedRow, classify_row,
    process_rows,
};
pub use workbook::{
    COL_DATE, COL_EMPLOYEE_NAME, COL_IN_TIME, COL_OUT_TIME, RawRow, read_workbook,
};
