//! Hour tallies by pay tier.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours split across the three pay tiers.
///
/// # Example
///
/// ```
/// use timecard_engine::models::OvertimeTally;
/// use rust_decimal::Decimal;
///
/// let week = OvertimeTally::new(Decimal::from(40), Decimal::from(8), Decimal::ZERO);
/// assert_eq!(week.total(), Decimal::from(48));
/// assert!(week.accounts_for(Decimal::from(48)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeTally {
    /// Hours paid at the regular rate.
    pub regular: Decimal,
    /// Hours paid at time-and-a-half.
    pub sesqui: Decimal,
    /// Hours paid at double time.
    pub double: Decimal,
}

impl OvertimeTally {
    /// Creates a tally from its three tiers.
    pub fn new(regular: Decimal, sesqui: Decimal, double: Decimal) -> Self {
        Self {
            regular,
            sesqui,
            double,
        }
    }

    /// The tally with no hours in any tier.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The hours across all tiers.
    pub fn total(&self) -> Decimal {
        self.regular + self.sesqui + self.double
    }

    /// Checks that the tiers add up to `worked` to within one second.
    pub fn accounts_for(&self, worked: Decimal) -> bool {
        (worked - self.total()).abs() < one_second()
    }

    /// Checks that two tallies agree tier by tier to within one second.
    pub fn agrees_with(&self, other: &OvertimeTally) -> bool {
        let tolerance = one_second();
        (self.regular - other.regular).abs() < tolerance
            && (self.sesqui - other.sesqui).abs() < tolerance
            && (self.double - other.double).abs() < tolerance
    }

    /// The tiers as a `(regular, sesqui, double)` tuple.
    pub fn as_tuple(&self) -> (Decimal, Decimal, Decimal) {
        (self.regular, self.sesqui, self.double)
    }
}

impl Add for OvertimeTally {
    type Output = OvertimeTally;

    fn add(self, rhs: OvertimeTally) -> OvertimeTally {
        OvertimeTally {
            regular: self.regular + rhs.regular,
            sesqui: self.sesqui + rhs.sesqui,
            double: self.double + rhs.double,
        }
    }
}

impl AddAssign for OvertimeTally {
    fn add_assign(&mut self, rhs: OvertimeTally) {
        *self = *self + rhs;
    }
}

impl Sum for OvertimeTally {
    fn sum<I: Iterator<Item = OvertimeTally>>(iter: I) -> Self {
        iter.fold(OvertimeTally::zero(), Add::add)
    }
}

impl<'a> Sum<&'a OvertimeTally> for OvertimeTally {
    fn sum<I: Iterator<Item = &'a OvertimeTally>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// The tally for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTally {
    /// The day being classified.
    pub date: NaiveDate,
    /// The tiers of the hours worked that day.
    pub tally: OvertimeTally,
}

/// Pay multipliers for the three tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierMultipliers {
    /// Multiplier for regular hours.
    pub regular: Decimal,
    /// Multiplier for time-and-a-half hours.
    pub sesqui: Decimal,
    /// Multiplier for double-time hours.
    pub double: Decimal,
}

/// One second, in hours: the accuracy every tier tally must meet.
pub fn one_second() -> Decimal {
    Decimal::ONE / Decimal::from(3600)
}
