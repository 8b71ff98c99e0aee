//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: the closed date window a
//! payroll run classifies hours over.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The number of days in a biweekly pay period.
pub const BIWEEKLY_PERIOD_DAYS: u64 = 14;

/// Represents a pay period with its inclusive date range.
///
/// Biweekly pay periods are identified by their last day, the payday.
///
/// # Example
///
/// ```
/// use timecard_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let payday = NaiveDate::from_ymd_opt(2019, 5, 31).unwrap();
/// let period = PayPeriod::ending_on(payday, 14);
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2019, 5, 18).unwrap());
/// assert_eq!(period.workweeks(), 2);
/// assert!(period.contains_date(payday));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period, rejecting windows that end before they start.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidPayPeriod {
                start: start_date,
                end: end_date,
                message: "the window ends before it starts".to_string(),
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// The period of `length` days whose last day is `payday`.
    pub fn ending_on(payday: NaiveDate, length: u64) -> Self {
        let start_date = payday
            .checked_sub_days(Days::new(length.saturating_sub(1)))
            .unwrap_or(NaiveDate::MIN);
        Self {
            start_date,
            end_date: payday,
        }
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::ending_on(NaiveDate::from_ymd_opt(2019, 5, 31).unwrap(), 14);
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2019, 5, 18).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2019, 5, 24).unwrap())); // middle
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2019, 5, 17).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2019, 6, 1).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The number of days in the period.
    pub fn days(&self) -> u64 {
        (self.end_date - self.start_date).num_days().unsigned_abs() + 1
    }

    /// The number of whole work weeks in the period.
    pub fn workweeks(&self) -> u32 {
        (self.days() / 7) as u32
    }

    /// Iterates over every date in the period.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |date| *date <= end)
    }
}
