//! Timecard engine for California payroll
//!
//! This crate reads time clock exports, merges manually logged mispunch
//! corrections, and classifies the hours worked into regular, time-and-a-half
//! and double time as California labor law requires, optionally deducting
//! mandated meal breaks that were not taken.
//!
//! # Example
//!
//! ```
//! use timecard_engine::calculation::{California, Jurisdiction};
//! use rust_decimal::Decimal;
//!
//! let week = [8, 8, 8, 8, 8, 8, 0].map(Decimal::from);
//! let tally = California::default().classify_week(&week);
//! assert_eq!(tally.regular, Decimal::from(40));
//! assert_eq!(tally.sesqui, Decimal::from(8));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod payroll;
pub mod reconcile;
pub mod schedule;
