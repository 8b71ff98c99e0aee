//! Day-by-day tier classification.
//!
//! The streaming classifier produces the same weekly totals as the batch
//! classifier, one calendar day at a time, so itemized reports can show how
//! each day was paid. It cannot look ahead: the running state of the current
//! work week lives in a [`WeekAccumulator`], and the seventh-day rule is applied
//! on the day that turns out to be the seventh worked day.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::config::OvertimeRules;
use crate::models::{DailyTally, EmployeeTimecard, OvertimeTally};

/// Running state of one work week.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::WeekAccumulator;
/// use timecard_engine::config::JurisdictionConfig;
/// use rust_decimal::Decimal;
///
/// let rules = JurisdictionConfig::default().overtime;
/// let mut week = WeekAccumulator::new();
///
/// let monday = week.classify(&rules, Decimal::from(10));
/// assert_eq!(monday.as_tuple(), (Decimal::from(8), Decimal::from(2), Decimal::ZERO));
/// assert_eq!(week.regular_so_far(), Decimal::from(8));
/// assert_eq!(week.workdays(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekAccumulator {
    regular_so_far: Decimal,
    workdays: u32,
}

impl WeekAccumulator {
    /// The state at the start of a work week.
    pub fn new() -> Self {
        Self::default()
    }

    /// Regular hours already granted this week.
    pub fn regular_so_far(&self) -> Decimal {
        self.regular_so_far
    }

    /// Days with hours worked so far this week.
    pub fn workdays(&self) -> u32 {
        self.workdays
    }

    /// Classifies the hours of the next day of the week.
    ///
    /// # Panics
    ///
    /// Panics if the tiers fail to account for `worked` to within one second,
    /// which can only happen through a defect in the classification itself.
    pub fn classify(&mut self, rules: &OvertimeRules, worked: Decimal) -> OvertimeTally {
        if worked <= Decimal::ZERO {
            return OvertimeTally::zero();
        }
        self.workdays += 1;

        let mut double = (worked - rules.daily_double_threshold).max(Decimal::ZERO);
        let excess = (worked - rules.daily_regular_hours)
            .max(Decimal::ZERO)
            .min(rules.daily_sesqui_cap());

        let mut sesqui = if rules.seventh_day_double && self.workdays == 7 {
            double += excess;
            Decimal::ZERO
        } else {
            excess
        };

        // the weekly cap turns would-be regular hours into time-and-a-half
        let unclassified = worked.min(rules.daily_regular_hours);
        let available = (rules.weekly_regular_hours - self.regular_so_far).max(Decimal::ZERO);
        let regular = available.min(unclassified);
        sesqui += (unclassified - available).max(Decimal::ZERO);

        self.regular_so_far += regular;

        let tally = OvertimeTally::new(regular, sesqui, double);
        assert!(
            tally.accounts_for(worked),
            "daily tiers {:?} do not account for {} hours worked",
            tally,
            worked
        );
        tally
    }
}

/// Iterator over the daily tallies of consecutive work weeks.
///
/// Yields one [`DailyTally`] for every calendar day in range, including days
/// without hours.
#[derive(Debug, Clone)]
pub struct DailyTallies<'a> {
    rules: &'a OvertimeRules,
    timecard: &'a EmployeeTimecard,
    start: NaiveDate,
    days: u64,
    index: u64,
    week: WeekAccumulator,
}

impl<'a> DailyTallies<'a> {
    /// Classifies `workweeks` weeks of `timecard`, the first one starting on `start`.
    pub fn new(
        rules: &'a OvertimeRules,
        timecard: &'a EmployeeTimecard,
        start: NaiveDate,
        workweeks: u32,
    ) -> Self {
        Self {
            rules,
            timecard,
            start,
            days: 7 * u64::from(workweeks),
            index: 0,
            week: WeekAccumulator::new(),
        }
    }

    /// The running state of the week in progress.
    pub fn week(&self) -> &WeekAccumulator {
        &self.week
    }
}

impl Iterator for DailyTallies<'_> {
    type Item = DailyTally;

    fn next(&mut self) -> Option<DailyTally> {
        if self.index >= self.days {
            return None;
        }
        if self.index % 7 == 0 {
            self.week = WeekAccumulator::new();
        }
        let date = self.start.checked_add_days(Days::new(self.index))?;
        self.index += 1;

        let worked = self.timecard.hours_on(date);
        let tally = self.week.classify(self.rules, worked);
        Some(DailyTally { date, tally })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.days - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DailyTallies<'_> {}

/// Folds a day-by-day stream back into one tally per seven days.
pub fn weekly_totals<I>(days: I) -> Vec<OvertimeTally>
where
    I: IntoIterator<Item = DailyTally>,
{
    let days: Vec<DailyTally> = days.into_iter().collect();
    days.chunks(7)
        .map(|week| week.iter().map(|day| day.tally).sum())
        .collect()
}
