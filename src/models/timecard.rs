//! Timecard and employee index models.
//!
//! A [`Timecard`] maps employee ids to dates to [`Punches`]. Entries are only
//! created through the explicit get-or-create accessors, and are never removed.
//!
//! Timecards are mutated in place by the parser and the mispunch reconciler.
//! They are not synchronized: callers sharing one across threads must provide
//! their own exclusion.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::punches::Punches;

/// An employee name as it appears on the time report.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeName {
    /// The family name.
    pub last: String,
    /// The given name.
    pub first: String,
}

impl EmployeeName {
    /// Creates a name from its parts, trimming surrounding whitespace.
    pub fn new(last: impl AsRef<str>, first: impl AsRef<str>) -> Self {
        Self {
            last: last.as_ref().trim().to_string(),
            first: first.as_ref().trim().to_string(),
        }
    }

    /// Checks whether this is the named person, ignoring case.
    pub fn matches(&self, last: &str, first: &str) -> bool {
        self.last.eq_ignore_ascii_case(last.trim()) && self.first.eq_ignore_ascii_case(first.trim())
    }
}

/// Renders as `LAST, FIRST`.
impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.last, self.first)
    }
}

/// The employees seen while parsing, by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeIndex {
    names: BTreeMap<String, EmployeeName>,
}

impl EmployeeIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the name of an employee, replacing any earlier spelling.
    pub fn insert(&mut self, employee_id: impl Into<String>, name: EmployeeName) {
        self.names.insert(employee_id.into(), name);
    }

    /// Looks up an employee by id.
    pub fn get(&self, employee_id: &str) -> Option<&EmployeeName> {
        self.names.get(employee_id)
    }

    /// Finds the id of the employee with the given name.
    pub fn find_by_name(&self, last: &str, first: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, name)| name.matches(last, first))
            .map(|(id, _)| id.as_str())
    }

    /// Iterates over `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EmployeeName)> {
        self.names.iter().map(|(id, name)| (id.as_str(), name))
    }

    /// The number of known employees.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no employee is known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One employee's punches, by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeTimecard {
    days: BTreeMap<NaiveDate, Punches>,
}

impl EmployeeTimecard {
    /// Creates an empty timecard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The punches on `date`, if any were ever recorded.
    pub fn day(&self, date: NaiveDate) -> Option<&Punches> {
        self.days.get(&date)
    }

    /// The punches on `date`, creating an empty list on first reference.
    pub fn day_mut(&mut self, date: NaiveDate) -> &mut Punches {
        self.days.entry(date).or_default()
    }

    /// Hours worked on `date`; zero for days without punches.
    pub fn hours_on(&self, date: NaiveDate) -> Decimal {
        self.day(date).map_or(Decimal::ZERO, Punches::hours)
    }

    /// Iterates over the recorded days in date order.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &Punches)> {
        self.days.iter().map(|(date, punches)| (*date, punches))
    }

    /// Whether no day has been recorded.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Punches for every employee in a data set.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{TaskKind, Timecard};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2019, 5, 20).unwrap();
/// let mut timecard = Timecard::new();
/// assert!(timecard.employee("1000").is_none());
///
/// timecard.punches_mut("1000", day).new_task(
///     TaskKind::Clock,
///     day.and_hms_opt(9, 0, 0).unwrap(),
///     day.and_hms_opt(17, 0, 0).unwrap(),
/// );
/// assert_eq!(timecard.employee("1000").unwrap().hours_on(day), Decimal::from(8));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timecard {
    employees: BTreeMap<String, EmployeeTimecard>,
}

impl Timecard {
    /// Creates an empty timecard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The punches of one employee, if any were ever recorded.
    pub fn employee(&self, employee_id: &str) -> Option<&EmployeeTimecard> {
        self.employees.get(employee_id)
    }

    /// The timecard of one employee, creating it on first reference.
    pub fn employee_mut(&mut self, employee_id: &str) -> &mut EmployeeTimecard {
        self.employees.entry(employee_id.to_string()).or_default()
    }

    /// The punches of one employee on one date, creating both levels on first reference.
    pub fn punches_mut(&mut self, employee_id: &str, date: NaiveDate) -> &mut Punches {
        self.employee_mut(employee_id).day_mut(date)
    }

    /// Iterates over `(id, timecard)` pairs in id order.
    pub fn employees(&self) -> impl Iterator<Item = (&str, &EmployeeTimecard)> {
        self.employees.iter().map(|(id, card)| (id.as_str(), card))
    }

    /// Whether no employee has been recorded.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// The earliest and latest dates with punch lists, across all employees.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self
            .employees
            .values()
            .flat_map(|card| card.days.keys().copied());
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), date| (lo.min(date), hi.max(date))))
    }
}
