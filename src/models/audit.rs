//! Audit entries narrating every change made to a timecard.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of change recorded by an [`AuditEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A task was created from a correction.
    Added,
    /// A clock time of an existing task was changed.
    Adjusted,
    /// An existing task was split around a meal break.
    Split,
    /// A correction was not applied.
    Skipped,
}

/// One change made by the mispunch reconciler.
///
/// The log of entries is the compliance record of who was changed, what was
/// changed and when the change applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// The fingerprint of the correction that caused the change.
    pub correction: Uuid,
    /// The employee whose punches changed.
    pub employee_id: String,
    /// The employee name, `LAST, FIRST`.
    pub employee_name: String,
    /// The day whose punches changed.
    pub date: NaiveDate,
    /// What happened.
    pub action: AuditAction,
    /// The clock field involved, e.g. `start` or `lunch_out`.
    pub field: Option<String>,
    /// The value before the change.
    pub before: Option<NaiveDateTime>,
    /// The value after the change.
    pub after: Option<NaiveDateTime>,
    /// Human-readable narration of the change.
    pub message: String,
}
