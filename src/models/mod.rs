//! Core data models for the attendance engine.

mod analytics;
mod attendance;
mod employee;

pub use analytics::{DailyAttendance, MonthlyAnalytics};
pub use attendance::{AttendanceRecord, MISSING_TIME};
pub use employee::Employee;
