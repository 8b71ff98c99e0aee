//! Application state for the timecard engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{Jurisdiction, jurisdiction_for};
use crate::config::ConfigLoader;
use crate::error::EngineResult;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded configuration and the calculators of the configured jurisdiction.
/// Both are immutable; every request builds its own timecard.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// The calculators of the configured jurisdiction.
    jurisdiction: Arc<dyn Jurisdiction>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownJurisdiction`](crate::error::EngineError::UnknownJurisdiction)
    /// if no calculators exist for the configured jurisdiction code.
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        let jurisdiction_config = config.jurisdiction();
        let jurisdiction = jurisdiction_for(
            &jurisdiction_config.jurisdiction.code,
            jurisdiction_config,
        )?;
        Ok(Self {
            config: Arc::new(config),
            jurisdiction: Arc::from(jurisdiction),
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the calculators of the configured jurisdiction.
    pub fn jurisdiction(&self) -> &dyn Jurisdiction {
        self.jurisdiction.as_ref()
    }
}
