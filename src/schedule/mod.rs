//! Pay period scheduling.
//!
//! Timecard exports are named after the payday that closes them. This module
//! discovers those files and turns a user's choice of payday or date range
//! into the [`PayPeriod`](crate::models::PayPeriod) to analyze and the files
//! that cover it.

mod discovery;
mod resolver;

pub use discovery::{TimecardFile, discover_timecards};
pub use resolver::{PayPeriodResolver, PeriodSelection};
