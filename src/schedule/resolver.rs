//! Resolution of the analysis window.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PayPeriod;

use super::TimecardFile;

/// What the user asked to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodSelection {
    /// The pay period closed by this payday.
    Payday {
        /// A payday with a timecard export.
        payday: NaiveDate,
    },
    /// The pay period closed by the most recent payday.
    Latest,
    /// An arbitrary window; missing ends default to the extent of the exports.
    ///
    /// The end is pushed out to the next pay period boundary counted from the start.
    Range {
        /// The first day to analyze.
        start: Option<NaiveDate>,
        /// The last day to analyze.
        end: Option<NaiveDate>,
    },
}

/// Turns a [`PeriodSelection`] into a [`PayPeriod`] and the exports covering it.
///
/// # Example
///
/// ```
/// use timecard_engine::schedule::{PayPeriodResolver, PeriodSelection, TimecardFile};
/// use chrono::NaiveDate;
///
/// let paydays = ["2019-05-17", "2019-05-31"];
/// let files = paydays
///     .iter()
///     .map(|day| TimecardFile {
///         payday: day.parse().unwrap(),
///         path: format!("{day}.csv").into(),
///     })
///     .collect();
///
/// let resolver = PayPeriodResolver::new(files, 14);
/// let period = resolver.resolve(PeriodSelection::Latest).unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2019, 5, 18).unwrap());
/// assert_eq!(resolver.select_files(&period).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PayPeriodResolver {
    files: Vec<TimecardFile>,
    period_days: u64,
}

impl PayPeriodResolver {
    /// Creates a resolver over the discovered exports.
    pub fn new(mut files: Vec<TimecardFile>, period_days: u64) -> Self {
        files.sort();
        Self { files, period_days }
    }

    /// The exports, ordered by payday.
    pub fn files(&self) -> &[TimecardFile] {
        &self.files
    }

    /// The number of days in a pay period.
    pub fn period_days(&self) -> u64 {
        self.period_days
    }

    /// Computes the window to analyze.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoTimecards`] if there are no exports to resolve against
    /// - [`EngineError::TimecardNotFound`] if a requested payday has no export
    /// - [`EngineError::InvalidPayPeriod`] if an explicit range is inverted
    pub fn resolve(&self, selection: PeriodSelection) -> EngineResult<PayPeriod> {
        let (Some(first), Some(last)) = (self.files.first(), self.files.last()) else {
            return Err(EngineError::NoTimecards {
                location: "timecard directory".to_string(),
            });
        };

        match selection {
            PeriodSelection::Payday { payday } => {
                if !self.files.iter().any(|file| file.payday == payday) {
                    return Err(EngineError::TimecardNotFound { payday });
                }
                Ok(PayPeriod::ending_on(payday, self.period_days))
            }
            PeriodSelection::Latest => Ok(PayPeriod::ending_on(last.payday, self.period_days)),
            PeriodSelection::Range { start, end } => {
                let start = start.unwrap_or_else(|| {
                    PayPeriod::ending_on(first.payday, self.period_days).start_date
                });
                let end = end.unwrap_or(last.payday);
                let window = PayPeriod::new(start, end)?;
                Ok(self.whole_periods(window))
            }
        }
    }

    /// Extends `window` so it spans a whole number of pay periods from its start.
    fn whole_periods(&self, window: PayPeriod) -> PayPeriod {
        let period_days = self.period_days.max(1);
        let span = window.days().div_ceil(period_days) * period_days;
        let end_date = window
            .start_date
            .checked_add_days(Days::new(span - 1))
            .unwrap_or(NaiveDate::MAX);
        PayPeriod {
            start_date: window.start_date,
            end_date,
        }
    }

    /// The exports holding punches for `period`.
    ///
    /// An export covers the `period_days` days up to its payday, so the last
    /// relevant one may close after the period ends.
    pub fn select_files(&self, period: &PayPeriod) -> Vec<&TimecardFile> {
        let reach = period
            .end_date
            .checked_add_days(Days::new(self.period_days))
            .unwrap_or(NaiveDate::MAX);
        self.files
            .iter()
            .filter(|file| file.payday >= period.start_date && file.payday < reach)
            .collect()
    }
}
