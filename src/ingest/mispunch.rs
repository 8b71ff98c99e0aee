//! Reader for the mispunch correction log.
//!
//! The log is a headed CSV kept by hand:
//!
//! ```text
//! status,id,first,last,date,start,lunch out,lunch in,end
//! ,,Jane,Doe,2019-05-20,8:00 AM,12:00 PM,12:30 PM,4:30 PM
//! ```
//!
//! `lunchOut` and `lunchIn` are accepted as header spellings too. Any of the
//! four times may be blank.

use std::io::Read;

use chrono::{NaiveDate, NaiveTime};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CorrectionRecord, IssueLog, ParseIssue};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%I:%M %p";

/// One row of the log, before type conversion.
#[derive(Debug, Deserialize)]
struct RawMispunch {
    #[serde(default)]
    status: String,
    #[serde(default)]
    id: String,
    first: String,
    last: String,
    date: String,
    #[serde(default)]
    start: String,
    #[serde(default, rename = "lunch out", alias = "lunchOut")]
    lunch_out: String,
    #[serde(default, rename = "lunch in", alias = "lunchIn")]
    lunch_in: String,
    #[serde(default)]
    end: String,
}

/// Loads correction records from a mispunch log.
#[derive(Debug, Clone, Copy, Default)]
pub struct MispunchReader;

impl MispunchReader {
    /// Creates a reader.
    pub fn new() -> Self {
        Self
    }

    /// Reads every row of `reader`.
    ///
    /// Rows that do not convert are reported as errors in the returned log
    /// and left out of the records.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Csv`] when the stream or its header cannot be read.
    pub fn read<R: Read>(
        &self,
        source: &str,
        reader: R,
    ) -> EngineResult<(Vec<CorrectionRecord>, IssueLog)> {
        let mut csv = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv
            .headers()
            .map_err(|e| EngineError::Csv {
                source_name: source.to_string(),
                message: e.to_string(),
            })?
            .clone();

        let mut records = Vec::new();
        let mut issues = IssueLog::new();
        for (index, result) in csv.records().enumerate() {
            // the header is line 1
            let fallback_line = index as u64 + 2;
            let row = match result {
                Ok(row) => row,
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
            let line = row.position().map_or(fallback_line, |p| p.line());
            let converted = row
                .deserialize::<RawMispunch>(Some(&headers))
                .map_err(|e| e.to_string())
                .and_then(convert);
            match converted {
                Ok(record) => records.push(record),
                Err(message) => issues.errors.push(ParseIssue::new(source, line, message)),
            }
        }

        debug!(
            source,
            records = records.len(),
            errors = issues.errors.len(),
            "Read mispunch log"
        );
        Ok((records, issues))
    }
}

fn convert(raw: RawMispunch) -> Result<CorrectionRecord, String> {
    let date = NaiveDate::parse_from_str(&raw.date, DATE_FORMAT)
        .map_err(|e| format!("bad date '{}': {e}", raw.date))?;
    let id = raw.id.trim();
    Ok(CorrectionRecord {
        status: flag(&raw.status)?,
        employee_id: (!id.is_empty()).then(|| id.to_string()),
        first: raw.first.trim().to_string(),
        last: raw.last.trim().to_string(),
        date,
        start: clock(&raw.start, "start")?,
        lunch_out: clock(&raw.lunch_out, "lunch out")?,
        lunch_in: clock(&raw.lunch_in, "lunch in")?,
        end: clock(&raw.end, "end")?,
    })
}

fn flag(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" | "x" | "done" => Ok(true),
        other => Err(format!("bad status '{other}'")),
    }
}

fn clock(value: &str, field: &str) -> Result<Option<NaiveTime>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map(Some)
        .map_err(|e| format!("bad {field} '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(log: &str) -> (Vec<CorrectionRecord>, IssueLog) {
        MispunchReader::new().read("mispunch.csv", log.as_bytes()).unwrap()
    }

    #[test]
    fn test_mr_001_reads_spaced_headers() {
        let (records, issues) = read(
            "status,id,first,last,date,start,lunch out,lunch in,end\n\
             ,,  Jane ,Doe ,2019-05-20,8:00 AM,12:00 PM,12:30 PM,4:30 PM\n",
        );
        assert!(issues.is_clean());
        let record = &records[0];
        assert!(!record.status);
        assert!(record.employee_id.is_none());
        assert_eq!(record.first, "Jane");
        assert_eq!(record.last, "Doe");
        assert_eq!(record.start, NaiveTime::from_hms_opt(8, 0, 0));
        assert_eq!(record.lunch_out, NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(record.lunch_in, NaiveTime::from_hms_opt(12, 30, 0));
        assert_eq!(record.end, NaiveTime::from_hms_opt(16, 30, 0));
    }

    #[test]
    fn test_mr_002_reads_camel_case_headers_and_blanks() {
        let (records, issues) = read(
            "status,id,first,last,date,start,lunchOut,lunchIn,end\n\
             true,\"1,000\",Jane,Doe,2019-05-21,,,,5:15 PM\n",
        );
        assert!(issues.is_clean());
        let record = &records[0];
        assert!(record.status);
        assert_eq!(record.employee_id.as_deref(), Some("1,000"));
        assert!(record.start.is_none());
        assert!(record.lunch_out.is_none());
        assert_eq!(record.end, NaiveTime::from_hms_opt(17, 15, 0));
    }

    #[test]
    fn test_mr_003_bad_rows_become_located_errors() {
        let (records, issues) = read(
            "status,id,first,last,date,start,lunch out,lunch in,end\n\
             ,,Jane,Doe,20/05/2019,,,,\n\
             ,,Jane,Doe,2019-05-22,25:00 PM,,,\n\
             ,,Jane,Doe,2019-05-23,9:00 AM,,,5:00 PM\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(issues.errors.len(), 2);
        assert_eq!(issues.errors[0].locator.line, 2);
        assert!(issues.errors[0].message.starts_with("bad date"));
        assert_eq!(issues.errors[1].locator.line, 3);
        assert!(issues.errors[1].message.starts_with("bad start"));
    }

    #[test]
    fn test_mr_004_status_spellings() {
        assert_eq!(flag(""), Ok(false));
        assert_eq!(flag("False"), Ok(false));
        assert_eq!(flag("TRUE"), Ok(true));
        assert_eq!(flag("x"), Ok(true));
        assert!(flag("maybe").is_err());
    }
}
