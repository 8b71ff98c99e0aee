//! HTTP API module for the timecard engine.
//!
//! This module provides the REST API endpoints for classifying hours worked
//! and running payroll over uploaded or on-disk time reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClassifyRequest, CsvUpload, PayrollRequest};
pub use response::{ApiError, ApiErrorResponse, DataSpan, IssueReport, PayrollResponse};
pub use state::AppState;
