//! Mispunch correction records.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A manually logged fix to an employee's clock punches for one day.
///
/// Any of the four times may be missing; only the ones present are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRecord {
    /// Set once the correction has been applied to the source data.
    pub status: bool,
    /// The employee id, when the log carries one.
    pub employee_id: Option<String>,
    /// The employee's given name.
    pub first: String,
    /// The employee's family name.
    pub last: String,
    /// The day being corrected.
    pub date: NaiveDate,
    /// The corrected start of the shift.
    pub start: Option<NaiveTime>,
    /// The corrected start of the meal break.
    pub lunch_out: Option<NaiveTime>,
    /// The corrected end of the meal break.
    pub lunch_in: Option<NaiveTime>,
    /// The corrected end of the shift.
    pub end: Option<NaiveTime>,
}

impl CorrectionRecord {
    /// Combines the record date with one of its times.
    pub fn at(&self, time: Option<NaiveTime>) -> Option<NaiveDateTime> {
        time.map(|t| self.date.and_time(t))
    }

    /// Whether the record carries no time at all.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.lunch_out.is_none() && self.lunch_in.is_none() && self.end.is_none()
    }

    /// A stable identifier for the content of this correction.
    ///
    /// Two records describing the same fix for the same person and day share a
    /// fingerprint regardless of their `status` flag or name capitalization.
    pub fn fingerprint(&self) -> Uuid {
        let time = |t: Option<NaiveTime>| t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default();
        let canonical = format!(
            "{}|{}|{}|{}|{}|{}|{}|{}",
            self.employee_id.as_deref().unwrap_or_default(),
            self.last.trim().to_lowercase(),
            self.first.trim().to_lowercase(),
            self.date,
            time(self.start),
            time(self.lunch_out),
            time(self.lunch_in),
            time(self.end),
        );
        Uuid::new_v5(&Uuid::NAMESPACE_OID, canonical.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CorrectionRecord {
        CorrectionRecord {
            status: false,
            employee_id: None,
            first: "JANE".to_string(),
            last: "DOE".to_string(),
            date: NaiveDate::from_ymd_opt(2019, 5, 20).unwrap(),
            start: NaiveTime::from_hms_opt(8, 0, 0),
            lunch_out: None,
            lunch_in: None,
            end: NaiveTime::from_hms_opt(16, 30, 0),
        }
    }

    #[test]
    fn test_fingerprint_ignores_status_and_case() {
        let mut other = record();
        other.status = true;
        other.first = "jane".to_string();
        assert_eq!(record().fingerprint(), other.fingerprint());
    }

    #[test]
    fn test_fingerprint_depends_on_times() {
        let mut other = record();
        other.end = NaiveTime::from_hms_opt(17, 0, 0);
        assert_ne!(record().fingerprint(), other.fingerprint());
    }

    #[test]
    fn test_at_combines_date_and_time() {
        let record = record();
        let start = record.at(record.start).unwrap();
        assert_eq!(start.to_string(), "2019-05-20 08:00:00");
        assert!(record.at(record.lunch_in).is_none());
    }

    #[test]
    fn test_is_empty() {
        let mut record = record();
        assert!(!record.is_empty());
        record.start = None;
        record.end = None;
        assert!(record.is_empty());
    }
}
