//! Readers for the CSV exports the engine consumes.
//!
//! - [`PunchParser`]: the headerless time report of raw clock punches
//! - [`MispunchReader`]: the headed log of manual punch corrections
//!
//! Both collect row-level problems as located [`ParseIssue`](crate::models::ParseIssue)
//! values and keep going; only failures of the stream itself are errors.

mod mispunch;
mod punch_parser;

pub use mispunch::MispunchReader;
pub use punch_parser::{PunchParser, TIME_REPORT_FORMAT};
