//! Mandated rest break enforcement.
//!
//! Every full block of worked hours earns an unpaid break. When the gaps
//! between an employee's punches fall short of the mandated break by more than
//! the tolerance, the shortfall is deducted from the hours worked.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::BreakRules;
use crate::models::Punches;

/// The outcome of checking one day's breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakAdjustment {
    /// Hours recorded on the punches.
    pub worked: Decimal,
    /// Break time required for those hours.
    pub mandated: Decimal,
    /// Break time observed between punches.
    pub taken: Decimal,
    /// Mandated minus taken; negative when more break was taken than required.
    pub deficit: Decimal,
    /// The hours to classify.
    pub adjusted: Decimal,
}

impl BreakAdjustment {
    /// Whether the deficit was deducted from the hours worked.
    pub fn is_penalized(&self) -> bool {
        self.adjusted != self.worked
    }
}

/// Applies a jurisdiction's break rules to daily punches.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::BreakEnforcer;
/// use timecard_engine::config::JurisdictionConfig;
/// use timecard_engine::models::{Punches, TaskKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let enforcer = BreakEnforcer::new(JurisdictionConfig::default().breaks);
/// let day = NaiveDate::from_ymd_opt(2019, 5, 20).unwrap();
/// let mut punches = Punches::new();
/// punches.new_task(TaskKind::Clock, day.and_hms_opt(8, 0, 0).unwrap(), day.and_hms_opt(16, 0, 0).unwrap());
///
/// // eight straight hours owe a thirty minute break
/// assert_eq!(enforcer.enforce(day, &punches), Decimal::new(75, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakEnforcer {
    rules: BreakRules,
}

impl BreakEnforcer {
    /// Creates an enforcer for the given rules.
    pub fn new(rules: BreakRules) -> Self {
        Self { rules }
    }

    /// The rules being enforced.
    pub fn rules(&self) -> &BreakRules {
        &self.rules
    }

    /// Break time required for `worked` hours.
    pub fn mandated(&self, worked: Decimal) -> Decimal {
        if self.rules.block_hours <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.rules.break_hours * (worked / self.rules.block_hours).floor()
    }

    /// Checks the breaks of one day's punches.
    pub fn assess(&self, punches: &Punches) -> BreakAdjustment {
        let worked = punches.hours();
        let taken = punches.breaks();
        let mandated = self.mandated(worked);
        let deficit = mandated - taken;

        let adjusted = if deficit > self.rules.tolerance * mandated {
            worked - deficit
        } else {
            worked
        };

        BreakAdjustment {
            worked,
            mandated,
            taken,
            deficit,
            adjusted,
        }
    }

    /// The hours worked on `date`, less any break shortfall beyond the tolerance.
    pub fn enforce(&self, date: NaiveDate, punches: &Punches) -> Decimal {
        let adjustment = self.assess(punches);
        if adjustment.is_penalized() {
            debug!(
                %date,
                worked = %adjustment.worked,
                mandated = %adjustment.mandated,
                taken = %adjustment.taken,
                deficit = %adjustment.deficit,
                "Mandated break not taken, deducting deficit"
            );
        }
        adjustment.adjusted
    }
}
