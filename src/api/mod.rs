//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoints for uploading attendance
//! sheets and reading monthly analytics.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportQuery;
pub use response::{ApiError, UploadResponse};
pub use state::AppState;
