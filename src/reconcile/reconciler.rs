//! Merging of mispunch corrections into parsed timecards.
//!
//! A correction record carries up to four clock times for one employee and
//! one day. How they are applied depends on how many tasks the day already
//! holds:
//!
//! - **No tasks**: the times become new `addition` tasks.
//! - **One task**: the shift is adjusted in place, and split in two when both
//!   meal break times are present.
//! - **Two or more tasks**: `start` and `lunch_out` edit the first task,
//!   `lunch_in` and `end` edit the last one.
//!
//! Edits for one record are staged on a copy of the day and committed only
//! when every task still finishes after it starts.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditAction, AuditEntry, CorrectionRecord, EmployeeIndex, PayPeriod, Punches, Task, TaskKind,
    Timecard,
};

use super::ReconciliationLedger;

/// The outcome of reconciling a batch of corrections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationReport {
    /// Every change made, in the order it was made.
    pub entries: Vec<AuditEntry>,
    /// Problems that did not stop reconciliation.
    pub warnings: Vec<String>,
    /// Fingerprints of the corrections applied by this run.
    pub applied: Vec<Uuid>,
    /// Records skipped because their status flag was set.
    pub already_processed: usize,
    /// Records skipped because the ledger had them.
    pub already_applied: usize,
    /// Records dated outside the pay period.
    pub out_of_period: usize,
    /// Records rejected because applying them would corrupt a task.
    pub rejected: usize,
}

impl ReconciliationReport {
    fn warn(&mut self, message: String) {
        warn!(%message, "Correction warning");
        self.warnings.push(message);
    }
}

/// Applies mispunch corrections to the punches of one pay period.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{CorrectionRecord, EmployeeIndex, PayPeriod, Timecard};
/// use timecard_engine::reconcile::{MispunchReconciler, ReconciliationLedger};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let payday = NaiveDate::from_ymd_opt(2019, 5, 31).unwrap();
/// let day = NaiveDate::from_ymd_opt(2019, 5, 20).unwrap();
/// let reconciler = MispunchReconciler::new(PayPeriod::ending_on(payday, 14));
///
/// let correction = CorrectionRecord {
///     status: false,
///     employee_id: Some("1000".to_string()),
///     first: "JANE".to_string(),
///     last: "DOE".to_string(),
///     date: day,
///     start: NaiveTime::from_hms_opt(8, 0, 0),
///     lunch_out: None,
///     lunch_in: None,
///     end: NaiveTime::from_hms_opt(16, 0, 0),
/// };
///
/// let mut timecard = Timecard::new();
/// let mut ledger = ReconciliationLedger::new();
/// let report = reconciler
///     .reconcile(&[correction], &mut timecard, &EmployeeIndex::new(), &mut ledger)
///     .unwrap();
///
/// assert_eq!(report.applied.len(), 1);
/// assert_eq!(timecard.employee("1000").unwrap().hours_on(day), Decimal::from(8));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MispunchReconciler {
    period: PayPeriod,
}

impl MispunchReconciler {
    /// Creates a reconciler for corrections dated within `period`.
    pub fn new(period: PayPeriod) -> Self {
        Self { period }
    }

    /// The pay period corrections are gated to.
    pub fn period(&self) -> PayPeriod {
        self.period
    }

    /// Applies every correction in order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnresolvedEmployee`] as soon as a record names
    /// an employee that is neither in `names` nor identified by id. Records
    /// applied before that point stay applied.
    pub fn reconcile<'r, I>(
        &self,
        corrections: I,
        timecard: &mut Timecard,
        names: &EmployeeIndex,
        ledger: &mut ReconciliationLedger,
    ) -> EngineResult<ReconciliationReport>
    where
        I: IntoIterator<Item = &'r CorrectionRecord>,
    {
        let mut report = ReconciliationReport::default();
        for record in corrections {
            self.apply(record, timecard, names, ledger, &mut report)?;
        }
        info!(
            applied = report.applied.len(),
            already_processed = report.already_processed,
            already_applied = report.already_applied,
            out_of_period = report.out_of_period,
            rejected = report.rejected,
            "Reconciliation complete"
        );
        Ok(report)
    }

    /// Applies one correction, recording the outcome in `report`.
    pub fn apply(
        &self,
        record: &CorrectionRecord,
        timecard: &mut Timecard,
        names: &EmployeeIndex,
        ledger: &mut ReconciliationLedger,
        report: &mut ReconciliationReport,
    ) -> EngineResult<()> {
        if record.status {
            report.already_processed += 1;
            return Ok(());
        }
        if !self.period.contains_date(record.date) {
            report.out_of_period += 1;
            return Ok(());
        }
        let fingerprint = record.fingerprint();
        if ledger.contains(&fingerprint) {
            report.already_applied += 1;
            return Ok(());
        }

        let employee_id = resolve_employee(record, names)?;
        let narrator = Narrator {
            correction: fingerprint,
            employee_name: names
                .get(&employee_id)
                .map(ToString::to_string)
                .unwrap_or_else(|| format!("{}, {}", record.last.trim(), record.first.trim())),
            employee_id,
            date: record.date,
        };

        if record.is_empty() {
            report.warn(narrator.describe("correction carries no times; ignored"));
            return Ok(());
        }

        let mut draft = timecard
            .employee(&narrator.employee_id)
            .and_then(|employee| employee.day(record.date))
            .cloned()
            .unwrap_or_default();
        let mut staged = Vec::new();
        match draft.len() {
            0 => add_tasks(record, &mut draft, &narrator, &mut staged, report),
            1 => adjust_shift(record, &mut draft, &narrator, &mut staged, report),
            n => {
                if n > 2 {
                    report.warn(narrator.describe(&format!(
                        "{n} tasks recorded; correcting only the first and last"
                    )));
                }
                adjust_bounds(record, &mut draft, &narrator, &mut staged);
            }
        }

        if staged.is_empty() {
            report.warn(narrator.describe("correction does not describe a complete interval; ignored"));
            return Ok(());
        }

        if let Some(task) = draft.iter().find(|task| !task.is_well_formed()) {
            let message = narrator.describe(&format!(
                "correction would leave a task finishing at {} before its start at {}; skipped",
                task.finish.format("%H:%M"),
                task.start.format("%H:%M"),
            ));
            report.rejected += 1;
            report
                .entries
                .push(narrator.entry(AuditAction::Skipped, None, None, None, message.clone()));
            report.warn(message);
            return Ok(());
        }

        draft.reorder();
        *timecard.punches_mut(&narrator.employee_id, record.date) = draft;
        for entry in staged {
            info!(
                employee_id = %entry.employee_id,
                date = %entry.date,
                action = ?entry.action,
                message = %entry.message,
                "Applied correction"
            );
            report.entries.push(entry);
        }
        ledger.record(fingerprint);
        report.applied.push(fingerprint);
        Ok(())
    }
}

/// Finds the employee a correction refers to: by name first, then by id.
fn resolve_employee(record: &CorrectionRecord, names: &EmployeeIndex) -> EngineResult<String> {
    if let Some(id) = names.find_by_name(&record.last, &record.first) {
        return Ok(id.to_string());
    }
    record
        .employee_id
        .as_deref()
        .map(|id| id.trim().replace(',', ""))
        .filter(|id| !id.is_empty())
        .ok_or_else(|| EngineError::UnresolvedEmployee {
            first: record.first.trim().to_string(),
            last: record.last.trim().to_string(),
            date: record.date,
        })
}

/// Writes audit entries for one correction.
struct Narrator {
    correction: Uuid,
    employee_id: String,
    employee_name: String,
    date: NaiveDate,
}

impl Narrator {
    fn describe(&self, what: &str) -> String {
        format!("{} on {}: {}", self.employee_name, self.date, what)
    }

    fn entry(
        &self,
        action: AuditAction,
        field: Option<&str>,
        before: Option<NaiveDateTime>,
        after: Option<NaiveDateTime>,
        message: String,
    ) -> AuditEntry {
        AuditEntry {
            correction: self.correction,
            employee_id: self.employee_id.clone(),
            employee_name: self.employee_name.clone(),
            date: self.date,
            action,
            field: field.map(str::to_string),
            before,
            after,
            message,
        }
    }

    fn added(&self, start: NaiveDateTime, finish: NaiveDateTime) -> AuditEntry {
        let message = self.describe(&format!(
            "added task {} to {}",
            start.format("%H:%M"),
            finish.format("%H:%M")
        ));
        self.entry(AuditAction::Added, None, None, Some(start), message)
    }

    fn changed(
        &self,
        action: AuditAction,
        field: &str,
        before: Option<NaiveDateTime>,
        after: NaiveDateTime,
    ) -> AuditEntry {
        let what = match before {
            Some(before) => format!(
                "{field} moved from {} to {}",
                before.format("%H:%M"),
                after.format("%H:%M")
            ),
            None => format!("{field} set to {}", after.format("%H:%M")),
        };
        self.entry(action, Some(field), before, Some(after), self.describe(&what))
    }
}

fn add_tasks(
    record: &CorrectionRecord,
    draft: &mut Punches,
    narrator: &Narrator,
    staged: &mut Vec<AuditEntry>,
    report: &mut ReconciliationReport,
) {
    let start = record.at(record.start);
    let lunch_out = record.at(record.lunch_out);
    let lunch_in = record.at(record.lunch_in);
    let end = record.at(record.end);

    let mut intervals = Vec::new();
    if let (Some(start), Some(lunch_out)) = (start, lunch_out) {
        intervals.push((start, lunch_out));
    }
    if let (Some(lunch_in), Some(end)) = (lunch_in, end) {
        intervals.push((lunch_in, end));
    }
    if intervals.is_empty() {
        if let (Some(start), Some(end)) = (start, end) {
            intervals.push((start, end));
        }
    } else if intervals.len() == 1 && lunch_out.is_some() != lunch_in.is_some() {
        report.warn(narrator.describe("unpaired meal break time ignored"));
    }

    for (start, finish) in intervals {
        draft.insert(Task::new(TaskKind::Addition, start, finish));
        staged.push(narrator.added(start, finish));
    }
}

fn adjust_shift(
    record: &CorrectionRecord,
    draft: &mut Punches,
    narrator: &Narrator,
    staged: &mut Vec<AuditEntry>,
    report: &mut ReconciliationReport,
) {
    let lunch_out = record.at(record.lunch_out);
    let lunch_in = record.at(record.lunch_in);
    let end = record.at(record.end);

    let mut second = None;
    {
        let Some(task) = draft.first_mut() else {
            return;
        };
        if let Some(start) = record.at(record.start) {
            staged.push(narrator.changed(AuditAction::Adjusted, "start", Some(task.start), start));
            task.start = start;
        }
        match (lunch_out, lunch_in) {
            (Some(lunch_out), Some(lunch_in)) => {
                let finish = end.unwrap_or(task.finish);
                staged.push(narrator.changed(
                    AuditAction::Split,
                    "lunch_out",
                    Some(task.finish),
                    lunch_out,
                ));
                task.finish = lunch_out;
                staged.push(narrator.changed(AuditAction::Split, "lunch_in", None, lunch_in));
                if end.is_some() {
                    staged.push(narrator.changed(AuditAction::Adjusted, "end", None, finish));
                }
                second = Some(Task::new(TaskKind::Correction, lunch_in, finish));
            }
            (lunch_out, lunch_in) => {
                if lunch_in.is_some() {
                    report.warn(narrator.describe("lunch in without lunch out ignored"));
                }
                if let (Some(_), Some(_)) = (lunch_out, end) {
                    report.warn(narrator.describe("lunch out without lunch in ignored"));
                }
                if let Some((field, finish)) = end
                    .map(|end| ("end", end))
                    .or_else(|| lunch_out.map(|out| ("lunch_out", out)))
                {
                    staged.push(narrator.changed(
                        AuditAction::Adjusted,
                        field,
                        Some(task.finish),
                        finish,
                    ));
                    task.finish = finish;
                }
            }
        }
        if !staged.is_empty() {
            task.name = TaskKind::Correction;
        }
    }
    if let Some(task) = second {
        draft.insert(task);
    }
}

fn adjust_bounds(
    record: &CorrectionRecord,
    draft: &mut Punches,
    narrator: &Narrator,
    staged: &mut Vec<AuditEntry>,
) {
    if let Some(first) = draft.first_mut() {
        let before = staged.len();
        if let Some(start) = record.at(record.start) {
            staged.push(narrator.changed(AuditAction::Adjusted, "start", Some(first.start), start));
            first.start = start;
        }
        if let Some(lunch_out) = record.at(record.lunch_out) {
            staged.push(narrator.changed(
                AuditAction::Adjusted,
                "lunch_out",
                Some(first.finish),
                lunch_out,
            ));
            first.finish = lunch_out;
        }
        if staged.len() > before {
            first.name = TaskKind::Correction;
        }
    }
    if let Some(last) = draft.last_mut() {
        let before = staged.len();
        if let Some(lunch_in) = record.at(record.lunch_in) {
            staged.push(narrator.changed(
                AuditAction::Adjusted,
                "lunch_in",
                Some(last.start),
                lunch_in,
            ));
            last.start = lunch_in;
        }
        if let Some(end) = record.at(record.end) {
            staged.push(narrator.changed(AuditAction::Adjusted, "end", Some(last.finish), end));
            last.finish = end;
        }
        if staged.len() > before {
            last.name = TaskKind::Correction;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeName;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 5, 20).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, 0).unwrap()
    }

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn reconciler() -> MispunchReconciler {
        let payday = NaiveDate::from_ymd_opt(2019, 5, 31).unwrap();
        MispunchReconciler::new(PayPeriod::ending_on(payday, 14))
    }

    fn names() -> EmployeeIndex {
        let mut names = EmployeeIndex::new();
        names.insert("1000", EmployeeName::new("DOE", "JANE"));
        names
    }

    fn correction() -> CorrectionRecord {
        CorrectionRecord {
            status: false,
            employee_id: None,
            first: "Jane".to_string(),
            last: "Doe ".to_string(),
            date: day(),
            start: None,
            lunch_out: None,
            lunch_in: None,
            end: None,
        }
    }

    fn run(records: &[CorrectionRecord], timecard: &mut Timecard) -> ReconciliationReport {
        let mut ledger = ReconciliationLedger::new();
        reconciler()
            .reconcile(records, timecard, &names(), &mut ledger)
            .unwrap()
    }

    fn punches(timecard: &Timecard) -> &Punches {
        timecard.employee("1000").unwrap().day(day()).unwrap()
    }

    // ==========================================================================
    // Empty days
    // ==========================================================================

    #[test]
    fn test_rc_001_full_day_added_as_two_tasks() {
        let mut record = correction();
        record.start = time(8, 0);
        record.lunch_out = time(12, 0);
        record.lunch_in = time(12, 30);
        record.end = time(16, 30);

        let mut timecard = Timecard::new();
        let report = run(&[record], &mut timecard);

        let day = punches(&timecard);
        assert_eq!(day.len(), 2);
        assert!(day.iter().all(|t| t.name == TaskKind::Addition));
        assert_eq!(day.hours(), dec("8"));
        assert_eq!(day.breaks(), dec("0.5"));
        assert_eq!(report.entries.len(), 2);
        assert!(report.entries.iter().all(|e| e.action == AuditAction::Added));
    }

    #[test]
    fn test_rc_002_start_and_end_only_adds_one_task() {
        let mut record = correction();
        record.start = time(9, 0);
        record.end = time(13, 0);

        let mut timecard = Timecard::new();
        run(&[record], &mut timecard);

        let day = punches(&timecard);
        assert_eq!(day.len(), 1);
        assert_eq!(day.tasks()[0].start, at(9, 0));
        assert_eq!(day.tasks()[0].finish, at(13, 0));
    }

    #[test]
    fn test_rc_003_lone_time_on_empty_day_is_ignored() {
        let mut record = correction();
        record.start = time(9, 0);

        let mut timecard = Timecard::new();
        let report = run(&[record], &mut timecard);

        assert!(report.applied.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert!(timecard.is_empty());
    }

    // ==========================================================================
    // One recorded task
    // ==========================================================================

    fn one_task() -> Timecard {
        let mut timecard = Timecard::new();
        timecard
            .punches_mut("1000", day())
            .new_task(TaskKind::Clock, at(9, 0), at(17, 0));
        timecard
    }

    #[test]
    fn test_rc_010_meal_break_splits_shift() {
        let mut record = correction();
        record.lunch_out = time(12, 0);
        record.lunch_in = time(12, 30);

        let mut timecard = one_task();
        let report = run(&[record], &mut timecard);

        let day = punches(&timecard);
        assert_eq!(day.len(), 2);
        assert_eq!(day.tasks()[0].finish, at(12, 0));
        assert_eq!(day.tasks()[1].start, at(12, 30));
        assert_eq!(day.tasks()[1].finish, at(17, 0));
        assert!(day.iter().all(|t| t.name == TaskKind::Correction));
        assert_eq!(day.breaks(), dec("0.5"));
        assert!(report.entries.iter().any(|e| e.action == AuditAction::Split));
    }

    #[test]
    fn test_rc_011_split_with_new_end() {
        let mut record = correction();
        record.lunch_out = time(12, 0);
        record.lunch_in = time(12, 30);
        record.end = time(18, 0);

        let mut timecard = one_task();
        run(&[record], &mut timecard);

        let day = punches(&timecard);
        assert_eq!(day.tasks()[1].finish, at(18, 0));
        assert_eq!(day.hours(), dec("8.5"));
    }

    #[test]
    fn test_rc_012_start_and_end_adjust_shift() {
        let mut record = correction();
        record.start = time(8, 0);
        record.end = time(16, 30);

        let mut timecard = one_task();
        let report = run(&[record], &mut timecard);

        let task = &punches(&timecard).tasks()[0];
        assert_eq!(task.start, at(8, 0));
        assert_eq!(task.finish, at(16, 30));
        assert_eq!(task.name, TaskKind::Correction);

        let start = &report.entries[0];
        assert_eq!(start.field.as_deref(), Some("start"));
        assert_eq!(start.before, Some(at(9, 0)));
        assert_eq!(start.after, Some(at(8, 0)));
        assert_eq!(start.employee_name, "DOE, JANE");
    }

    #[test]
    fn test_rc_013_lunch_out_alone_ends_shift() {
        let mut record = correction();
        record.lunch_out = time(13, 0);

        let mut timecard = one_task();
        run(&[record], &mut timecard);

        assert_eq!(punches(&timecard).tasks()[0].finish, at(13, 0));
    }

    // ==========================================================================
    // Several recorded tasks
    // ==========================================================================

    #[test]
    fn test_rc_020_two_tasks_edit_first_and_last() {
        let mut timecard = Timecard::new();
        let day_punches = timecard.punches_mut("1000", day());
        day_punches.new_task(TaskKind::Clock, at(9, 0), at(12, 0));
        day_punches.new_task(TaskKind::Clock, at(12, 30), at(17, 0));

        let mut record = correction();
        record.start = time(8, 45);
        record.end = time(17, 15);
        run(&[record], &mut timecard);

        let day = punches(&timecard);
        assert_eq!(day.tasks()[0].start, at(8, 45));
        assert_eq!(day.tasks()[0].finish, at(12, 0));
        assert_eq!(day.tasks()[1].start, at(12, 30));
        assert_eq!(day.tasks()[1].finish, at(17, 15));
    }

    #[test]
    fn test_rc_021_three_tasks_warns_and_edits_bounds() {
        let mut timecard = Timecard::new();
        let day_punches = timecard.punches_mut("1000", day());
        day_punches.new_task(TaskKind::Clock, at(9, 0), at(11, 0));
        day_punches.new_task(TaskKind::Clock, at(11, 30), at(13, 0));
        day_punches.new_task(TaskKind::Clock, at(13, 30), at(17, 0));

        let mut record = correction();
        record.lunch_in = time(13, 15);
        let report = run(&[record], &mut timecard);

        assert_eq!(report.warnings.len(), 1);
        let day = punches(&timecard);
        assert_eq!(day.len(), 3);
        assert_eq!(day.tasks()[2].start, at(13, 15));
        assert_eq!(day.tasks()[1].name, TaskKind::Clock);
    }

    // ==========================================================================
    // Gating and validation
    // ==========================================================================

    #[test]
    fn test_rc_030_inverted_edit_is_rejected_atomically() {
        let mut record = correction();
        record.start = time(8, 0);
        record.end = time(7, 0);

        let mut timecard = one_task();
        let report = run(&[record], &mut timecard);

        let task = &punches(&timecard).tasks()[0];
        assert_eq!(task.start, at(9, 0));
        assert_eq!(task.finish, at(17, 0));
        assert_eq!(report.rejected, 1);
        assert!(report.applied.is_empty());
        assert_eq!(report.entries[0].action, AuditAction::Skipped);
    }

    #[test]
    fn test_rc_031_processed_and_out_of_period_records_skipped() {
        let mut processed = correction();
        processed.status = true;
        processed.start = time(8, 0);
        processed.end = time(16, 0);

        let mut early = processed.clone();
        early.status = false;
        early.date = NaiveDate::from_ymd_opt(2019, 5, 1).unwrap();

        let mut timecard = Timecard::new();
        let report = run(&[processed, early], &mut timecard);

        assert_eq!(report.already_processed, 1);
        assert_eq!(report.out_of_period, 1);
        assert!(timecard.is_empty());
    }

    #[test]
    fn test_rc_032_rerun_with_ledger_is_idempotent() {
        let mut record = correction();
        record.lunch_out = time(12, 0);
        record.lunch_in = time(12, 30);

        let mut timecard = one_task();
        let mut ledger = ReconciliationLedger::new();
        let reconciler = reconciler();
        let records = [record];
        reconciler
            .reconcile(&records, &mut timecard, &names(), &mut ledger)
            .unwrap();
        let second = reconciler
            .reconcile(&records, &mut timecard, &names(), &mut ledger)
            .unwrap();

        assert_eq!(second.already_applied, 1);
        assert_eq!(punches(&timecard).len(), 2);
    }

    #[test]
    fn test_rc_033_explicit_id_used_when_name_unknown() {
        let mut record = correction();
        record.first = "JOHN".to_string();
        record.last = "ROE".to_string();
        record.employee_id = Some("2,000".to_string());
        record.start = time(8, 0);
        record.end = time(12, 0);

        let mut timecard = Timecard::new();
        run(&[record], &mut timecard);

        assert_eq!(timecard.employee("2000").unwrap().hours_on(day()), dec("4"));
    }

    #[test]
    fn test_rc_034_unresolvable_employee_is_an_error() {
        let mut record = correction();
        record.first = "JOHN".to_string();
        record.last = "ROE".to_string();
        record.start = time(8, 0);
        record.end = time(12, 0);

        let mut timecard = Timecard::new();
        let mut ledger = ReconciliationLedger::new();
        let result = reconciler().reconcile(&[record], &mut timecard, &names(), &mut ledger);

        assert!(matches!(
            result,
            Err(EngineError::UnresolvedEmployee { ref last, .. }) if last == "ROE"
        ));
    }

    fn stranger() -> CorrectionRecord {
        let mut record = correction();
        record.first = "PAT".to_string();
        record.last = "POE".to_string();
        record.employee_id = Some("9999".to_string());
        record
    }

    #[test]
    fn test_rc_035_ignored_correction_leaves_no_employee_behind() {
        let mut record = stranger();
        record.start = time(9, 0);

        let mut timecard = Timecard::new();
        let report = run(&[record], &mut timecard);

        assert!(report.applied.is_empty());
        assert!(timecard.is_empty());
        assert!(timecard.employee("9999").is_none());
    }

    #[test]
    fn test_rc_036_rejected_correction_leaves_no_employee_behind() {
        let mut record = stranger();
        record.start = time(13, 0);
        record.end = time(9, 0);

        let mut timecard = Timecard::new();
        let report = run(&[record], &mut timecard);

        assert_eq!(report.rejected, 1);
        assert!(report.applied.is_empty());
        assert!(timecard.is_empty());
    }
}
