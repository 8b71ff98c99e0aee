//! Parser for the time report of raw clock punches.
//!
//! The report is a headerless CSV export. Each row is one clock-in/clock-out
//! pair; the columns the engine needs sit at fixed offsets:
//!
//! | Offset | Content                                  |
//! |--------|------------------------------------------|
//! | 6      | employee, e.g. `1,234 DOE,  JANE`        |
//! | 10     | clock-in, e.g. `05/20/2019 09:00:00AM`   |
//! | 11     | clock-out                                |

use std::io::Read;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeIndex, EmployeeName, IssueLog, ParseIssue, TaskKind, Timecard};

/// Timestamp format of the clock-in and clock-out columns.
pub const TIME_REPORT_FORMAT: &str = "%m/%d/%Y %I:%M:%S%p";

const OFFSET_EMPLOYEE: usize = 6;
const OFFSET_CLOCKIN: usize = 10;
const OFFSET_CLOCKOUT: usize = 11;

/// Extracts clock punches from a time report.
///
/// # Example
///
/// ```
/// use timecard_engine::ingest::PunchParser;
/// use timecard_engine::models::{EmployeeIndex, Timecard};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let report = ",,,,,,\"1,000 DOE,  JANE\",,,,05/20/2019 09:00:00AM,05/20/2019 05:00:00PM\n";
/// let mut names = EmployeeIndex::new();
/// let mut timecard = Timecard::new();
///
/// let issues = PunchParser::new()
///     .parse("report.csv", report.as_bytes(), &mut names, &mut timecard)
///     .unwrap();
///
/// assert!(issues.is_clean());
/// assert_eq!(names.get("1000").unwrap().to_string(), "DOE, JANE");
/// let day = NaiveDate::from_ymd_opt(2019, 5, 20).unwrap();
/// assert_eq!(timecard.employee("1000").unwrap().hours_on(day), Decimal::from(8));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PunchParser;

impl PunchParser {
    /// Creates a parser for the current report layout.
    pub fn new() -> Self {
        Self
    }

    /// Reads every row of `reader`, adding names to `names` and tasks to `timecard`.
    ///
    /// `source` names the stream in issue locators. Rows that cannot be used
    /// are skipped and reported as errors; suspicious rows that are kept are
    /// reported as warnings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Csv`] only when the stream itself fails.
    pub fn parse<R: Read>(
        &self,
        source: &str,
        reader: R,
        names: &mut EmployeeIndex,
        timecard: &mut Timecard,
    ) -> EngineResult<IssueLog> {
        let mut csv = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut issues = IssueLog::new();
        let mut rows = 0usize;
        for (index, result) in csv.records().enumerate() {
            let fallback_line = index as u64 + 1;
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => {
                    return Err(EngineError::Csv {
                        source_name: source.to_string(),
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    let line = e.position().map_or(fallback_line, |p| p.line());
                    issues.errors.push(ParseIssue::new(source, line, e.to_string()));
                    continue;
                }
            };
            let line = record.position().map_or(fallback_line, |p| p.line());
            rows += 1;
            self.parse_row(source, line, &record, names, timecard, &mut issues);
        }

        debug!(
            source,
            rows,
            errors = issues.errors.len(),
            warnings = issues.warnings.len(),
            "Parsed time report"
        );
        if !issues.errors.is_empty() {
            warn!(source, errors = issues.errors.len(), "Time report rows skipped");
        }
        Ok(issues)
    }

    fn parse_row(
        &self,
        source: &str,
        line: u64,
        record: &StringRecord,
        names: &mut EmployeeIndex,
        timecard: &mut Timecard,
        issues: &mut IssueLog,
    ) {
        let field = |offset| record.get(offset).map(str::trim).unwrap_or_default();
        let info = field(OFFSET_EMPLOYEE);
        let clockin = field(OFFSET_CLOCKIN);
        let clockout = field(OFFSET_CLOCKOUT);

        if info.is_empty() || clockin.is_empty() || clockout.is_empty() {
            let mut complaints = Vec::new();
            if info.is_empty() {
                complaints.push("no employee info");
            }
            if clockin.is_empty() {
                complaints.push("no clock in");
            }
            if clockout.is_empty() {
                complaints.push("no clock out");
            }
            let mut message = String::new();
            if let Some((_, name)) = split_employee(info) {
                message.push_str(&format!("{}: ", spoken(&name)));
            }
            if let Ok(stamp) = NaiveDateTime::parse_from_str(clockin, TIME_REPORT_FORMAT) {
                message.push_str(&format!("on {}: ", stamp.date()));
            }
            message.push_str(&complaints.join(", "));
            issues.errors.push(ParseIssue::new(source, line, message));
            return;
        }

        let Some((employee_id, name)) = split_employee(info) else {
            issues.errors.push(ParseIssue::new(
                source,
                line,
                format!("malformed employee info '{info}'"),
            ));
            return;
        };

        let (start, finish) = match (
            NaiveDateTime::parse_from_str(clockin, TIME_REPORT_FORMAT),
            NaiveDateTime::parse_from_str(clockout, TIME_REPORT_FORMAT),
        ) {
            (Ok(start), Ok(finish)) => (start, finish),
            (Err(e), _) => {
                issues.errors.push(ParseIssue::new(
                    source,
                    line,
                    format!("{}: bad clock in '{clockin}': {e}", spoken(&name)),
                ));
                return;
            }
            (_, Err(e)) => {
                issues.errors.push(ParseIssue::new(
                    source,
                    line,
                    format!("{}: bad clock out '{clockout}': {e}", spoken(&name)),
                ));
                return;
            }
        };

        let date = start.date();
        if finish <= start {
            issues.errors.push(ParseIssue::new(
                source,
                line,
                format!(
                    "{}: on {date}: clock out {} is not after clock in {}",
                    spoken(&name),
                    finish.time(),
                    start.time()
                ),
            ));
            return;
        }
        if finish.date() != date {
            issues.warnings.push(ParseIssue::new(
                source,
                line,
                format!(
                    "{}: date mismatch: in: {date}, out: {}",
                    spoken(&name),
                    finish.date()
                ),
            ));
        }

        timecard
            .punches_mut(&employee_id, date)
            .new_task(TaskKind::Clock, start, finish);
        names.insert(employee_id, name);
    }
}

/// Splits `1,234 DOE,  JANE` into the id `1234` and the name.
fn split_employee(info: &str) -> Option<(String, EmployeeName)> {
    let (raw_id, raw_name) = info.split_once(char::is_whitespace)?;
    let employee_id = raw_id.replace(',', "");
    let (last, first) = raw_name
        .trim()
        .split_once(",  ")
        .unwrap_or((raw_name.trim(), ""));
    Some((employee_id, EmployeeName::new(last, first)))
}

/// Renders a name the way it is spoken, `JANE DOE`.
fn spoken(name: &EmployeeName) -> String {
    if name.first.is_empty() {
        name.last.clone()
    } else {
        format!("{} {}", name.first, name.last)
    }
}
