//! Task model: one clock-in/clock-out interval.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a task came to be on a punch list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// A raw clock punch read from a timecard.
    #[serde(rename = "in")]
    Clock,
    /// A raw punch whose times were edited by a mispunch correction.
    #[serde(rename = "correction")]
    Correction,
    /// A task synthesized from a mispunch correction.
    #[serde(rename = "addition")]
    Addition,
}

impl TaskKind {
    /// Returns the label used in reports and audit logs.
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Clock => "in",
            TaskKind::Correction => "correction",
            TaskKind::Addition => "addition",
        }
    }
}

/// Time worked between a clock-in and a clock-out.
///
/// A task never crosses midnight in well-formed data; the parser warns when it
/// does and files the task under its clock-in date.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{Task, TaskKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2019, 5, 20).unwrap();
/// let task = Task::new(
///     TaskKind::Clock,
///     day.and_hms_opt(9, 0, 0).unwrap(),
///     day.and_hms_opt(13, 30, 0).unwrap(),
/// );
/// assert_eq!(task.hours(), Decimal::new(45, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// The task label.
    pub name: TaskKind,
    /// The clock-in timestamp.
    pub start: NaiveDateTime,
    /// The clock-out timestamp.
    pub finish: NaiveDateTime,
    /// Whether the time counts towards hours worked.
    pub billable: bool,
}

impl Task {
    /// Creates a billable task.
    pub fn new(name: TaskKind, start: NaiveDateTime, finish: NaiveDateTime) -> Self {
        Self {
            name,
            start,
            finish,
            billable: true,
        }
    }

    /// The duration of the task in fractional hours.
    pub fn hours(&self) -> Decimal {
        hours_in(self.finish - self.start)
    }

    /// Checks that the task finishes after it starts.
    pub fn is_well_formed(&self) -> bool {
        self.finish > self.start
    }
}

/// Converts a time span into fractional hours, with second resolution.
pub fn hours_in(delta: TimeDelta) -> Decimal {
    Decimal::from(delta.num_seconds()) / Decimal::from(3600)
}
