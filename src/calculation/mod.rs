//! Calculation logic for the attendance engine.
//!
//! This module contains the pure functions of the engine: day-type
//! classification, spreadsheet date decoding, worked-hours interval
//! calculation, and the monthly aggregation pass that rolls classified
//! records into a productivity summary.

use rust_decimal::{Decimal, RoundingStrategy};

mod day_type;
mod excel_date;
mod monthly_summary;
mod worked_hours;

pub use day_type::{DayType, day_type_for};
pub use excel_date::{DateInput, decode_excel_date};
pub use monthly_summary::{build_monthly_analytics, expected_hours_for_month, month_bounds};
pub use worked_hours::calculate_worked_hours;

// All hour and percentage values round to 2 decimals, half away from zero.
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
