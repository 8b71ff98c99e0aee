//! Configuration loading and management for the timecard engine.
//!
//! This module provides functionality to load jurisdiction rule sets and
//! payroll settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/california").unwrap();
//! println!("Loaded jurisdiction: {}", config.jurisdiction().jurisdiction.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BreakRules, EngineConfig, JurisdictionConfig, JurisdictionMetadata, OvertimeRules,
    PayrollConfig,
};
