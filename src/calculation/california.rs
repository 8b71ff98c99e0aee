//! California overtime and break calculators.
//!
//! ## Tier Structure
//!
//! - Every hour beyond 12 in a day is double time.
//! - Hours between 8 and 12 in a day are time-and-a-half.
//! - The first 8 hours of a day are regular, up to 40 regular hours a week.
//! - Hours beyond 40 in a week not already paid double are time-and-a-half,
//!   when that beats the daily tally.
//! - On the seventh consecutive work day of a week, daily time-and-a-half
//!   hours are paid double.
//!
//! The thresholds come from [`JurisdictionConfig`], which defaults to the
//! values above.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::config::JurisdictionConfig;
use crate::models::{DailyTally, EmployeeTimecard, OvertimeTally, Punches, TierMultipliers};

use super::break_enforcement::BreakEnforcer;
use super::jurisdiction::Jurisdiction;
use super::streaming::DailyTallies;

/// Calculators compliant with California law.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{California, Jurisdiction};
/// use rust_decimal::Decimal;
///
/// let california = California::default();
/// let hours = [12, 12, 12, 12, 0, 0, 0].map(Decimal::from);
/// let week = california.classify_week(&hours);
///
/// assert_eq!(week.as_tuple(), (Decimal::from(32), Decimal::from(16), Decimal::ZERO));
/// ```
#[derive(Debug, Clone)]
pub struct California {
    config: JurisdictionConfig,
    enforcer: BreakEnforcer,
}

impl California {
    /// The registry code of California.
    pub const CODE: &'static str = "us.california";

    /// Creates the calculators from a rule set.
    pub fn new(config: JurisdictionConfig) -> Self {
        let enforcer = BreakEnforcer::new(config.breaks.clone());
        Self { config, enforcer }
    }

    /// The rule set in use.
    pub fn config(&self) -> &JurisdictionConfig {
        &self.config
    }

    fn daily_sesqui(&self, worked: Decimal) -> Decimal {
        let rules = &self.config.overtime;
        (worked - rules.daily_regular_hours)
            .max(Decimal::ZERO)
            .min(rules.daily_sesqui_cap())
    }

    fn week_of<F>(start: NaiveDate, workweek: u32, mut hours_on: F) -> [Decimal; 7]
    where
        F: FnMut(NaiveDate) -> Decimal,
    {
        let first = u64::from(workweek) * 7;
        std::array::from_fn(|dow| {
            start
                .checked_add_days(Days::new(first + dow as u64))
                .map_or(Decimal::ZERO, &mut hours_on)
        })
    }
}

impl Default for California {
    fn default() -> Self {
        Self::new(JurisdictionConfig::default())
    }
}

impl Jurisdiction for California {
    fn code(&self) -> &str {
        Self::CODE
    }

    fn tiers(&self) -> TierMultipliers {
        self.config.tiers
    }

    fn classify_week(&self, hours: &[Decimal; 7]) -> OvertimeTally {
        let rules = &self.config.overtime;
        let total: Decimal = hours.iter().sum();
        let workdays = hours.iter().filter(|h| **h > Decimal::ZERO).count();

        let mut double = Decimal::ZERO;
        let mut sesqui = Decimal::ZERO;
        let mut regular = Decimal::ZERO;
        for worked in hours {
            double += (*worked - rules.daily_double_threshold).max(Decimal::ZERO);
            sesqui += self.daily_sesqui(*worked);
            regular += (*worked).min(rules.daily_regular_hours).max(Decimal::ZERO);
        }

        // seven consecutive days: the last day's overtime is paid double
        if rules.seventh_day_double && workdays == 7 {
            let seventh = self.daily_sesqui(hours[6]);
            sesqui -= seventh;
            double += seventh;
        }

        // weekly overtime: hours past 40 not already paid double
        let weekly = (total - double - rules.weekly_regular_hours).max(Decimal::ZERO);
        let sesqui = sesqui.max(weekly);
        let regular = regular.min(rules.weekly_regular_hours);

        let tally = OvertimeTally::new(regular, sesqui, double);
        assert!(
            tally.accounts_for(total),
            "weekly tiers {:?} do not account for {} hours worked",
            tally,
            total
        );
        tally
    }

    fn overtime(
        &self,
        start: NaiveDate,
        workweeks: u32,
        timecard: &EmployeeTimecard,
    ) -> Vec<OvertimeTally> {
        (0..workweeks)
            .map(|week| {
                let hours = Self::week_of(start, week, |date| timecard.hours_on(date));
                self.classify_week(&hours)
            })
            .collect()
    }

    fn overtime_by_day<'a>(
        &'a self,
        start: NaiveDate,
        workweeks: u32,
        timecard: &'a EmployeeTimecard,
    ) -> Box<dyn Iterator<Item = DailyTally> + 'a> {
        Box::new(DailyTallies::new(
            &self.config.overtime,
            timecard,
            start,
            workweeks,
        ))
    }

    fn breaks(
        &self,
        start: NaiveDate,
        workweeks: u32,
        timecard: &EmployeeTimecard,
    ) -> Vec<OvertimeTally> {
        (0..workweeks)
            .map(|week| {
                let hours = Self::week_of(start, week, |date| {
                    timecard
                        .day(date)
                        .map_or(Decimal::ZERO, |punches| self.enforce_breaks(date, punches))
                });
                self.classify_week(&hours)
            })
            .collect()
    }

    fn enforce_breaks(&self, date: NaiveDate, punches: &Punches) -> Decimal {
        self.enforcer.enforce(date, punches)
    }
}
