//! Response types for the timecard engine API.
//!
//! This module defines the payroll response body, the error response
//! structures and the mapping of engine errors onto HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::Jurisdiction;
use crate::error::EngineError;
use crate::models::{IssueLog, PayPeriod, ParseIssue, TierMultipliers, summarize};
use crate::payroll::EmployeeHours;
use crate::reconcile::ReconciliationReport;

/// The dates actually present in the data set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DataSpan {
    /// The earliest date with punches.
    pub start: NaiveDate,
    /// The latest date with punches.
    pub end: NaiveDate,
}

/// Issues found in one kind of input, with their counted summary.
#[derive(Debug, Clone, Serialize)]
pub struct IssueReport {
    /// The number of issues.
    pub count: usize,
    /// The issues, one per line, followed by the count.
    pub summary: String,
    /// The issues themselves.
    pub issues: Vec<ParseIssue>,
}

impl IssueReport {
    fn new(issues: Vec<ParseIssue>, noun: &str) -> Self {
        Self {
            count: issues.len(),
            summary: summarize(&issues, noun),
            issues,
        }
    }
}

/// Response body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollResponse {
    /// The jurisdiction whose rules were applied.
    pub jurisdiction: String,
    /// Pay multipliers of the regular, time-and-a-half and double tiers.
    pub tiers: TierMultipliers,
    /// The window that was classified.
    pub period: PayPeriod,
    /// The dates actually present in the time reports.
    pub data_span: Option<DataSpan>,
    /// The time reports that were read.
    pub files: Vec<String>,
    /// Classified hours per employee, ordered by name.
    pub employees: Vec<EmployeeHours>,
    /// Rows that were skipped.
    pub errors: IssueReport,
    /// Rows that were kept despite something unusual.
    pub warnings: IssueReport,
    /// What the mispunch corrections changed, when a log was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciliation: Option<ReconciliationReport>,
}

impl PayrollResponse {
    /// Assembles the response, splitting `issues` into errors and warnings.
    pub fn new(
        jurisdiction: &dyn Jurisdiction,
        period: PayPeriod,
        data_span: Option<(NaiveDate, NaiveDate)>,
        files: Vec<String>,
        employees: Vec<EmployeeHours>,
        issues: IssueLog,
        reconciliation: Option<ReconciliationReport>,
    ) -> Self {
        Self {
            jurisdiction: jurisdiction.code().to_string(),
            tiers: jurisdiction.tiers(),
            period,
            data_span: data_span.map(|(start, end)| DataSpan { start, end }),
            files,
            employees,
            errors: IssueReport::new(issues.errors, "error"),
            warnings: IssueReport::new(issues.warnings, "warning"),
            reconciliation,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::UnknownJurisdiction { code } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "UNKNOWN_JURISDICTION",
                    message,
                    format!("No calculators are registered for '{}'", code),
                ),
            ),
            EngineError::TimecardNotFound { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("TIMECARD_NOT_FOUND", message),
            ),
            EngineError::NoTimecards { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("NO_TIMECARDS", message),
            ),
            EngineError::InvalidPayPeriod { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_PAY_PERIOD", message),
            ),
            EngineError::UnresolvedEmployee { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "UNRESOLVED_EMPLOYEE",
                    message,
                    "The correction names nobody on the time report and carries no employee id",
                ),
            ),
            EngineError::Csv { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("CSV_ERROR", message),
            ),
            EngineError::Io { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("IO_ERROR", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
