//! In-process attendance store.
//!
//! The persistence collaborator for the engine: employees unique by exact
//! name, attendance records unique per (employee, date). Upsert is the
//! sole mutation primitive, so replaying a batch is always safe. Records
//! are keyed in a [`BTreeMap`] and month queries come back in ascending
//! date order.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::calculation::DayType;
use crate::models::{AttendanceRecord, Employee};

/// The replaceable fields of an attendance upsert.
///
/// Everything except the record id, which survives updates so a
/// re-uploaded date keeps its identity.
#[derive(Debug, Clone)]
pub struct AttendanceUpdate {
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The raw in-punch, absent when the cell was empty.
    pub in_time: Option<String>,
    /// The raw out-punch, absent when the cell was empty.
    pub out_time: Option<String>,
    /// Hours worked on this date.
    pub worked_hours: Decimal,
    /// Whether this working day counts as a leave.
    pub is_leave: bool,
    /// The day type derived from the date.
    pub day_type: DayType,
}

#[derive(Default)]
struct StoreInner {
    employees: HashMap<String, Employee>,
    attendance: BTreeMap<(Uuid, NaiveDate), AttendanceRecord>,
}

/// Thread-safe in-memory store for employees and attendance records.
#[derive(Default)]
pub struct AttendanceStore {
    inner: RwLock<StoreInner>,
}

impl AttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the employee with the given name, creating one if absent.
    ///
    /// Names match exactly and case-sensitively; "alice" and "Alice" are
    /// two employees.
    pub fn upsert_employee(&self, name: &str) -> Employee {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner
            .employees
            .entry(name.to_string())
            .or_insert_with(|| Employee::new(name))
            .clone()
    }

    /// Looks up an employee by exact name.
    pub fn find_employee(&self, name: &str) -> Option<Employee> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.employees.get(name).cloned()
    }

    /// Inserts or fully replaces the attendance record at
    /// (employee, date), returning the stored record.
    ///
    /// An existing record keeps its id; all other fields are replaced.
    pub fn upsert_attendance(&self, employee_id: Uuid, update: AttendanceUpdate) -> AttendanceRecord {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let key = (employee_id, update.date);

        let id = inner
            .attendance
            .get(&key)
            .map(|existing| existing.id)
            .unwrap_or_else(Uuid::new_v4);

        let record = AttendanceRecord {
            id,
            employee_id,
            date: update.date,
            in_time: update.in_time,
            out_time: update.out_time,
            worked_hours: update.worked_hours,
            is_leave: update.is_leave,
            day_type: update.day_type,
        };

        inner.attendance.insert(key, record.clone());
        record
    }

    /// Returns an employee's records with date in `[start, end)`,
    /// ascending by date.
    pub fn attendance_between(
        &self,
        employee_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<AttendanceRecord> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .attendance
            .range((employee_id, start)..(employee_id, end))
            .map(|(_, record)| record.clone())
            .collect()
    }
}
