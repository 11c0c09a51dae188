//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::AttendancePolicy;
use crate::store::AttendanceStore;

/// Shared application state.
///
/// Contains the injected attendance policy and the attendance store,
/// shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<AttendancePolicy>,
    store: Arc<AttendanceStore>,
}

impl AppState {
    /// Creates a new application state with the given policy and an empty
    /// store.
    pub fn new(policy: AttendancePolicy) -> Self {
        Self {
            policy: Arc::new(policy),
            store: Arc::new(AttendanceStore::new()),
        }
    }

    /// Returns a reference to the attendance policy.
    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }

    /// Returns a reference to the attendance store.
    pub fn store(&self) -> &AttendanceStore {
        &self.store
    }
}
