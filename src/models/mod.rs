//! Core data models for the timecard engine.
//!
//! This module contains the punch data, the tier tallies, and the records
//! produced while reading and reconciling timecards.

mod audit;
mod correction;
mod issues;
mod pay_period;
mod punches;
mod tally;
mod task;
mod timecard;

pub use audit::{AuditAction, AuditEntry};
pub use correction::CorrectionRecord;
pub use issues::{IssueLog, Locator, ParseIssue, summarize};
pub use pay_period::{BIWEEKLY_PERIOD_DAYS, PayPeriod};
pub use punches::Punches;
pub use tally::{DailyTally, OvertimeTally, TierMultipliers, one_second};
pub use task::{Task, TaskKind, hours_in};
pub use timecard::{EmployeeIndex, EmployeeName, EmployeeTimecard, Timecard};
