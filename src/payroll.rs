//! Payroll runs: tier tallies for every employee over one pay period.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::{debug, info};

use crate::calculation::{Jurisdiction, weekly_totals};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DailyTally, EmployeeIndex, EmployeeName, EmployeeTimecard, OvertimeTally, PayPeriod, Timecard,
};

/// The classified hours of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeHours {
    /// The employee id.
    pub employee_id: String,
    /// The employee name.
    pub name: EmployeeName,
    /// Tiers after deducting mandated breaks that were not taken.
    pub enforced: OvertimeTally,
    /// Tiers of the hours as punched.
    pub recorded: OvertimeTally,
    /// Whether `enforced` is the tally to pay.
    pub breaks_enforced: bool,
    /// The recorded hours, one calendar day at a time.
    pub daily: Vec<DailyTally>,
}

impl EmployeeHours {
    /// The tally that goes on the paycheck.
    pub fn payable(&self) -> OvertimeTally {
        if self.breaks_enforced {
            self.enforced
        } else {
            self.recorded
        }
    }
}

/// Classifies the hours of every selected employee over a pay period.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::California;
/// use timecard_engine::models::{EmployeeIndex, EmployeeName, PayPeriod, TaskKind, Timecard};
/// use timecard_engine::payroll::PayrollRun;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let payday = NaiveDate::from_ymd_opt(2019, 5, 31).unwrap();
/// let period = PayPeriod::ending_on(payday, 14);
/// let day = period.start_date;
///
/// let mut names = EmployeeIndex::new();
/// names.insert("1000", EmployeeName::new("DOE", "JANE"));
/// let mut timecard = Timecard::new();
/// timecard.punches_mut("1000", day).new_task(
///     TaskKind::Clock,
///     day.and_hms_opt(6, 0, 0).unwrap(),
///     day.and_hms_opt(16, 0, 0).unwrap(),
/// );
///
/// let california = California::default();
/// let hours = PayrollRun::new(&california).run(&timecard, &names, &period);
///
/// assert_eq!(hours[0].recorded.sesqui, Decimal::from(2));
/// // a ten hour day without a meal break loses half an hour
/// assert_eq!(hours[0].enforced.total(), Decimal::new(95, 1));
/// ```
pub struct PayrollRun<'j> {
    jurisdiction: &'j dyn Jurisdiction,
    enforce_breaks: bool,
    filter: Option<Regex>,
}

impl<'j> PayrollRun<'j> {
    /// Creates a run over every employee, enforcing breaks.
    pub fn new(jurisdiction: &'j dyn Jurisdiction) -> Self {
        Self {
            jurisdiction,
            enforce_breaks: true,
            filter: None,
        }
    }

    /// Chooses whether the payable tally deducts missed breaks.
    pub fn enforce_breaks(mut self, enforce: bool) -> Self {
        self.enforce_breaks = enforce;
        self
    }

    /// Restricts the run to employees whose `LAST, FIRST` name matches any
    /// of `patterns`, ignoring case. An empty list selects everyone.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParseError`] if a pattern is not a valid
    /// regular expression.
    pub fn employees<I, S>(mut self, patterns: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| format!("(?:{})", p.as_ref()))
            .collect();
        if patterns.is_empty() {
            self.filter = None;
            return Ok(self);
        }
        let regex = RegexBuilder::new(&patterns.join("|"))
            .case_insensitive(true)
            .build()
            .map_err(|e| EngineError::ConfigParseError {
                path: "employees".to_string(),
                message: e.to_string(),
            })?;
        self.filter = Some(regex);
        Ok(self)
    }

    /// Whether the named employee is part of this run.
    pub fn includes(&self, name: &EmployeeName) -> bool {
        self.filter
            .as_ref()
            .is_none_or(|regex| regex.is_match(&name.to_string()))
    }

    /// Classifies every selected employee, ordered by name.
    ///
    /// Employees without an entry in `names` are listed under their id.
    pub fn run(
        &self,
        timecard: &Timecard,
        names: &EmployeeIndex,
        period: &PayPeriod,
    ) -> Vec<EmployeeHours> {
        let mut selected: Vec<(EmployeeName, &str, &EmployeeTimecard)> = timecard
            .employees()
            .map(|(id, punches)| {
                let name = names
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| EmployeeName::new(id, ""));
                (name, id, punches)
            })
            .filter(|(name, _, _)| self.includes(name))
            .collect();
        selected.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

        let hours: Vec<EmployeeHours> = selected
            .into_iter()
            .map(|(name, id, punches)| self.employee(id, name, punches, period))
            .collect();

        info!(
            jurisdiction = self.jurisdiction.code(),
            start = %period.start_date,
            end = %period.end_date,
            employees = hours.len(),
            "Payroll run complete"
        );
        hours
    }

    /// Classifies one employee.
    ///
    /// # Panics
    ///
    /// Panics if the day-by-day classification disagrees with the weekly one,
    /// which would mean the calculators are broken.
    pub fn employee(
        &self,
        employee_id: &str,
        name: EmployeeName,
        timecard: &EmployeeTimecard,
        period: &PayPeriod,
    ) -> EmployeeHours {
        let start = period.start_date;
        let workweeks = period.workweeks();

        let weeks = self.jurisdiction.overtime(start, workweeks, timecard);
        let daily: Vec<DailyTally> = self
            .jurisdiction
            .overtime_by_day(start, workweeks, timecard)
            .collect();
        for (batch, stream) in weeks.iter().zip(weekly_totals(daily.iter().copied())) {
            assert!(
                batch.agrees_with(&stream),
                "weekly tiers {:?} disagree with daily tiers {:?} for employee {}",
                batch.as_tuple(),
                stream.as_tuple(),
                employee_id
            );
        }

        let recorded: OvertimeTally = weeks.iter().sum();
        let enforced: OvertimeTally = self
            .jurisdiction
            .breaks(start, workweeks, timecard)
            .iter()
            .sum();
        debug!(
            employee_id,
            recorded = %recorded.total(),
            enforced = %enforced.total(),
            "Classified employee"
        );

        EmployeeHours {
            employee_id: employee_id.to_string(),
            name,
            enforced,
            recorded,
            breaks_enforced: self.enforce_breaks,
            daily,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::California;
    use crate::models::TaskKind;
    use chrono::{Days, NaiveDate};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn period() -> PayPeriod {
        PayPeriod::ending_on(NaiveDate::from_ymd_opt(2019, 5, 31).unwrap(), 14)
    }

    fn shift(timecard: &mut Timecard, id: &str, offset: u64, hours: u32) {
        let day = period().start_date + Days::new(offset);
        timecard.punches_mut(id, day).new_task(
            TaskKind::Clock,
            day.and_hms_opt(6, 0, 0).unwrap(),
            day.and_hms_opt(6 + hours, 0, 0).unwrap(),
        );
    }

    fn staff() -> (Timecard, EmployeeIndex) {
        let mut names = EmployeeIndex::new();
        names.insert("1000", EmployeeName::new("ZED", "ANNA"));
        names.insert("2000", EmployeeName::new("DOE", "JANE"));
        names.insert("3000", EmployeeName::new("DOE", "JOHN"));

        let mut timecard = Timecard::new();
        for offset in 0..5 {
            shift(&mut timecard, "1000", offset, 8);
            shift(&mut timecard, "2000", offset, 10);
        }
        shift(&mut timecard, "3000", 7, 4);
        (timecard, names)
    }

    #[test]
    fn test_pay_001_employees_sorted_by_name() {
        let (timecard, names) = staff();
        let california = California::default();
        let hours = PayrollRun::new(&california).run(&timecard, &names, &period());

        let order: Vec<String> = hours.iter().map(|h| h.name.to_string()).collect();
        assert_eq!(order, vec!["DOE, JANE", "DOE, JOHN", "ZED, ANNA"]);
    }

    #[test]
    fn test_pay_002_name_filter_is_case_insensitive() {
        let (timecard, names) = staff();
        let california = California::default();
        let hours = PayrollRun::new(&california)
            .employees(["^doe, j", "nobody"])
            .unwrap()
            .run(&timecard, &names, &period());

        assert_eq!(hours.len(), 2);
        assert!(hours.iter().all(|h| h.name.last == "DOE"));
    }

    #[test]
    fn test_pay_003_bad_filter_is_an_error() {
        let california = California::default();
        assert!(PayrollRun::new(&california).employees(["(unclosed"]).is_err());
    }

    #[test]
    fn test_pay_004_enforced_and_recorded_tallies() {
        let (timecard, names) = staff();
        let california = California::default();
        let hours = PayrollRun::new(&california).run(&timecard, &names, &period());
        let jane = &hours[0];

        // five ten hour days without breaks
        assert_eq!(jane.recorded.as_tuple(), (dec("40"), dec("10"), dec("0")));
        assert_eq!(jane.enforced.total(), dec("47.5"));
        assert_eq!(jane.payable(), jane.enforced);
        assert_eq!(jane.daily.len(), 14);
    }

    #[test]
    fn test_pay_005_recorded_tally_is_payable_without_enforcement() {
        let (timecard, names) = staff();
        let california = California::default();
        let hours = PayrollRun::new(&california)
            .enforce_breaks(false)
            .run(&timecard, &names, &period());

        assert_eq!(hours[0].payable(), hours[0].recorded);
    }

    #[test]
    fn test_pay_006_unnamed_employee_listed_by_id() {
        let (mut timecard, names) = staff();
        shift(&mut timecard, "9999", 1, 6);
        let california = California::default();
        let hours = PayrollRun::new(&california).run(&timecard, &names, &period());

        assert!(hours.iter().any(|h| h.employee_id == "9999" && h.name.last == "9999"));
    }

    #[test]
    fn test_pay_007_daily_stream_sums_to_recorded() {
        let (timecard, names) = staff();
        let california = California::default();
        for hours in PayrollRun::new(&california).run(&timecard, &names, &period()) {
            let streamed: OvertimeTally = hours.daily.iter().map(|d| d.tally).sum();
            assert!(streamed.agrees_with(&hours.recorded));
        }
    }
}
