//! Hours classification for the timecard engine.
//!
//! This module splits hours worked into pay tiers:
//! the batch weekly classifier and its streaming day-by-day counterpart,
//! meal break enforcement, and the jurisdiction registry that ties the rule
//! sets to configuration.

mod break_enforcement;
mod california;
mod jurisdiction;
mod streaming;

pub use break_enforcement::{BreakAdjustment, BreakEnforcer};
pub use california::California;
pub use jurisdiction::{Jurisdiction, jurisdiction_for};
pub use streaming::{DailyTallies, WeekAccumulator, weekly_totals};
