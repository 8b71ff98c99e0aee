//! Record of corrections already merged into timecard data.
//!
//! The ledger makes reconciliation idempotent: a correction whose fingerprint
//! is present has been applied before and is not applied again, whatever the
//! `status` column of the mispunch log says.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Fingerprints of the corrections that have been applied.
///
/// # Example
///
/// ```
/// use timecard_engine::reconcile::ReconciliationLedger;
/// use uuid::Uuid;
///
/// let mut ledger = ReconciliationLedger::new();
/// let fingerprint = Uuid::new_v4();
/// assert!(ledger.record(fingerprint));
/// assert!(!ledger.record(fingerprint));
/// assert!(ledger.contains(&fingerprint));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationLedger {
    applied: BTreeSet<Uuid>,
}

impl ReconciliationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a ledger saved by [`ReconciliationLedger::save`].
    ///
    /// A missing file is an empty ledger.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        let path_str = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path_str.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Writes the ledger as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|e| EngineError::Io {
            path: path.display().to_string(),
            source: e.into(),
        })?;
        fs::write(path, content).map_err(|source| EngineError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Whether the correction has been applied.
    pub fn contains(&self, fingerprint: &Uuid) -> bool {
        self.applied.contains(fingerprint)
    }

    /// Marks a correction as applied; false if it already was.
    pub fn record(&mut self, fingerprint: Uuid) -> bool {
        self.applied.insert(fingerprint)
    }

    /// The number of applied corrections.
    pub fn len(&self) -> usize {
        self.applied.len()
    }

    /// Whether nothing has been applied.
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_ledger() {
        let ledger = ReconciliationLedger::load("/nonexistent/ledger.json").unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "timecard-engine-ledger-{}.json",
            std::process::id()
        ));
        let mut ledger = ReconciliationLedger::new();
        ledger.record(Uuid::new_v4());
        ledger.record(Uuid::new_v4());
        ledger.save(&path).unwrap();

        let loaded = ReconciliationLedger::load(&path).unwrap();
        assert_eq!(loaded, ledger);
        assert_eq!(loaded.len(), 2);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_ledger_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "timecard-engine-ledger-corrupt-{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json").unwrap();
        assert!(ReconciliationLedger::load(&path).is_err());
        fs::remove_file(&path).unwrap();
    }
}
