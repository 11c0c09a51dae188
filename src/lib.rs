//! Attendance Calculation & Aggregation Engine
//!
//! This crate ingests employee attendance rows from spreadsheet uploads,
//! persists them in an in-process store, and computes monthly productivity
//! analytics (expected vs. worked hours, leave usage) over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod store;
