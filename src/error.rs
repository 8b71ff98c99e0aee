//! Error types for the timecard engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every recoverable failure of the engine. Row-level problems found while
//! reading timecards are not errors in this sense: they are collected as
//! [`ParseIssue`](crate::models::ParseIssue) values so a single bad row never
//! blocks a pay period. Inconsistent tier tallies are programming defects and
//! panic instead of surfacing here.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the timecard engine.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/jurisdiction.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/jurisdiction.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No calculator is registered for the requested jurisdiction.
    #[error("Unknown jurisdiction: {code}")]
    UnknownJurisdiction {
        /// The jurisdiction code that was requested.
        code: String,
    },

    /// No timecard file exists for the requested payday.
    #[error("No timecard found for payday {payday}")]
    TimecardNotFound {
        /// The payday that was requested.
        payday: NaiveDate,
    },

    /// Timecard discovery found nothing to analyze.
    #[error("No timecard files found in {location}")]
    NoTimecards {
        /// Where the timecards were looked for.
        location: String,
    },

    /// The requested analysis window is empty or inverted.
    #[error("Invalid pay period {start} to {end}: {message}")]
    InvalidPayPeriod {
        /// The first day of the window.
        start: NaiveDate,
        /// The last day of the window.
        end: NaiveDate,
        /// Why the window was rejected.
        message: String,
    },

    /// A correction record names an employee that cannot be resolved.
    #[error("Cannot resolve employee '{first} {last}' for the correction on {date}")]
    UnresolvedEmployee {
        /// The first name on the correction record.
        first: String,
        /// The last name on the correction record.
        last: String,
        /// The date of the correction.
        date: NaiveDate,
    },

    /// An underlying I/O operation failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The file that was being accessed.
        path: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed in a way that is not attributable to one row.
    #[error("CSV error in '{source_name}': {message}")]
    Csv {
        /// The name of the stream being read.
        source_name: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
