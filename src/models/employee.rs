//! Employee model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an employee known to the attendance store.
///
/// The name is the employee's identity: unique, case-sensitive, and
/// matched exactly against upload rows and report queries. Employees are
/// created lazily on first appearance in an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's name, unique across the store.
    pub name: String,
}

impl Employee {
    /// Creates a new employee with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
