//! Row-level problems found while reading input files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a row came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    /// The name of the stream being read, usually a file path.
    pub source: String,
    /// The 1-based line number of the row.
    pub line: u64,
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.line)
    }
}

/// A problem with one row of input.
///
/// Issues are collected rather than raised, so that one malformed row never
/// blocks the rest of a pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseIssue {
    /// The offending row.
    pub locator: Locator,
    /// What is wrong with it.
    pub message: String,
}

impl ParseIssue {
    /// Creates an issue for `line` of `source`.
    pub fn new(source: &str, line: u64, message: impl Into<String>) -> Self {
        Self {
            locator: Locator {
                source: source.to_string(),
                line,
            },
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.locator, self.message)
    }
}

/// Errors and warnings collected while reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLog {
    /// Rows that were skipped.
    pub errors: Vec<ParseIssue>,
    /// Rows that were kept despite something unusual.
    pub warnings: Vec<ParseIssue>,
}

impl IssueLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the contents of another log.
    pub fn extend(&mut self, other: IssueLog) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Whether nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// A counted summary of the errors.
    pub fn error_summary(&self) -> String {
        summarize(&self.errors, "error")
    }

    /// A counted summary of the warnings.
    pub fn warning_summary(&self) -> String {
        summarize(&self.warnings, "warning")
    }
}

/// Renders issues one per line, followed by a count such as `3 errors total`.
pub fn summarize(issues: &[ParseIssue], noun: &str) -> String {
    let mut summary = String::new();
    for issue in issues {
        summary.push_str(&format!("  {}\n", issue));
    }
    let plural = if issues.len() == 1 { "" } else { "s" };
    summary.push_str(&format!("{} {}{} total", issues.len(), noun, plural));
    summary
}
