//! Mispunch reconciliation.
//!
//! - [`MispunchReconciler`] merges correction records into a [`Timecard`](crate::models::Timecard)
//! - [`ReconciliationLedger`] remembers which corrections were already merged

mod ledger;
mod reconciler;

pub use ledger::ReconciliationLedger;
pub use reconciler::{MispunchReconciler, ReconciliationReport};
