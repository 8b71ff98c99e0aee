//! Request types for the timecard engine API.
//!
//! This module defines the JSON request structures for the `/classify` and
//! `/payroll` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schedule::PeriodSelection;

use super::response::ApiError;

/// Request body for the `/classify` endpoint.
///
/// Carries the hours worked on each day of one work week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Hours worked on each of the seven days, first day of the work week first.
    pub hours: [Decimal; 7],
}

impl ClassifyRequest {
    /// Checks that no day has negative hours.
    pub fn validate(&self) -> Result<(), ApiError> {
        match self.hours.iter().position(|h| h.is_sign_negative() && !h.is_zero()) {
            Some(day) => Err(ApiError::validation_error(format!(
                "hours[{day}] must not be negative"
            ))),
            None => Ok(()),
        }
    }
}

/// A CSV document uploaded inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvUpload {
    /// The file name of the document, used in issue locators.
    pub source: String,
    /// The document content.
    pub csv: String,
}

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The time report to analyze.
    ///
    /// Its `source` must be named after its payday, e.g. `20190531-time.csv`.
    /// When absent, the exports in the configured timecard directory are used.
    #[serde(default)]
    pub timecard: Option<CsvUpload>,
    /// A mispunch log to merge before classifying.
    #[serde(default)]
    pub corrections: Option<CsvUpload>,
    /// The window to analyze; the latest pay period by default.
    #[serde(default = "default_period")]
    pub period: PeriodSelection,
    /// Overrides the configured break enforcement.
    #[serde(default)]
    pub enforce_breaks: Option<bool>,
    /// Name patterns selecting the employees to report; everyone when empty.
    #[serde(default)]
    pub employees: Vec<String>,
}

fn default_period() -> PeriodSelection {
    PeriodSelection::Latest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_request_accepts_string_decimals() {
        let request: ClassifyRequest =
            serde_json::from_str(r#"{"hours": ["8", "8.5", 0, 0, 0, 0, "12.25"]}"#).unwrap();
        assert_eq!(request.hours[1], Decimal::new(85, 1));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_classify_request_needs_seven_days() {
        let result = serde_json::from_str::<ClassifyRequest>(r#"{"hours": [8, 8, 8]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_classify_request_rejects_negative_hours() {
        let request: ClassifyRequest =
            serde_json::from_str(r#"{"hours": [8, "-1", 0, 0, 0, 0, 0]}"#).unwrap();
        let error = request.validate().unwrap_err();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("hours[1]"));
    }

    #[test]
    fn test_payroll_request_defaults() {
        let request: PayrollRequest = serde_json::from_str("{}").unwrap();
        assert!(request.timecard.is_none());
        assert_eq!(request.period, PeriodSelection::Latest);
        assert!(request.enforce_breaks.is_none());
        assert!(request.employees.is_empty());
    }

    #[test]
    fn test_payroll_request_with_payday() {
        let request: PayrollRequest = serde_json::from_str(
            r#"{
                "timecard": {"source": "20190531-time.csv", "csv": ""},
                "period": {"kind": "payday", "payday": "2019-05-31"},
                "employees": ["doe"]
            }"#,
        )
        .unwrap();
        assert_eq!(
            request.period,
            PeriodSelection::Payday {
                payday: "2019-05-31".parse().unwrap()
            }
        );
        assert_eq!(request.timecard.unwrap().source, "20190531-time.csv");
    }
}
