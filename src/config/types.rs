//! Configuration types for hours classification.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every structure defaults
//! to the California rule set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BIWEEKLY_PERIOD_DAYS, TierMultipliers};

/// Metadata about the jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// The registry code of the jurisdiction (e.g., "us.california").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// Reference to the statute the rules implement.
    #[serde(default)]
    pub source: Option<String>,
}

/// Daily and weekly overtime thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRules {
    /// Hours per day paid at the regular rate.
    pub daily_regular_hours: Decimal,
    /// Hours per day beyond which all time is double time.
    pub daily_double_threshold: Decimal,
    /// Regular hours allowed per work week.
    pub weekly_regular_hours: Decimal,
    /// Whether daily overtime on the seventh consecutive work day is paid double.
    pub seventh_day_double: bool,
}

impl OvertimeRules {
    /// The most time-and-a-half hours a single day can earn.
    pub fn daily_sesqui_cap(&self) -> Decimal {
        (self.daily_double_threshold - self.daily_regular_hours).max(Decimal::ZERO)
    }
}

/// Mandated rest break rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRules {
    /// The length of a work block that earns a break, in hours.
    pub block_hours: Decimal,
    /// The length of the break earned per block, in hours.
    pub break_hours: Decimal,
    /// The fraction of the mandated break that may go untaken without penalty.
    pub tolerance: Decimal,
}

/// The rule set of one jurisdiction, from `jurisdiction.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionConfig {
    /// Identifying information.
    pub jurisdiction: JurisdictionMetadata,
    /// Overtime thresholds.
    pub overtime: OvertimeRules,
    /// Rest break rules.
    pub breaks: BreakRules,
    /// Pay multipliers of the three tiers.
    pub tiers: TierMultipliers,
}

/// Payroll run settings, from `payroll.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// The number of days in a pay period.
    #[serde(default = "default_period_days")]
    pub period_days: u64,
    /// The directory holding the timecard exports.
    #[serde(default = "default_timecard_dir")]
    pub timecard_dir: String,
    /// Regular expression matching timecard file names; its first group is the payday.
    #[serde(default = "default_timecard_pattern")]
    pub timecard_pattern: String,
    /// Whether payroll runs enforce the mandated breaks.
    #[serde(default = "default_enforce_breaks")]
    pub enforce_breaks: bool,
}

fn default_period_days() -> u64 {
    BIWEEKLY_PERIOD_DAYS
}

fn default_timecard_dir() -> String {
    "/etc/timecards".to_string()
}

fn default_timecard_pattern() -> String {
    r"^(\d{8})-time\.csv$".to_string()
}

fn default_enforce_breaks() -> bool {
    true
}

impl Default for JurisdictionConfig {
    fn default() -> Self {
        Self {
            jurisdiction: JurisdictionMetadata {
                code: "us.california".to_string(),
                name: "California".to_string(),
                source: Some("Cal. Lab. Code §510, §512".to_string()),
            },
            overtime: OvertimeRules {
                daily_regular_hours: Decimal::from(8),
                daily_double_threshold: Decimal::from(12),
                weekly_regular_hours: Decimal::from(40),
                seventh_day_double: true,
            },
            breaks: BreakRules {
                block_hours: Decimal::from(6),
                break_hours: Decimal::new(5, 1),
                tolerance: Decimal::new(1, 1),
            },
            tiers: TierMultipliers {
                regular: Decimal::ONE,
                sesqui: Decimal::new(15, 1),
                double: Decimal::TWO,
            },
        }
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            period_days: default_period_days(),
            timecard_dir: default_timecard_dir(),
            timecard_pattern: default_timecard_pattern(),
            enforce_breaks: default_enforce_breaks(),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    jurisdiction: JurisdictionConfig,
    payroll: PayrollConfig,
}

impl EngineConfig {
    /// Creates a configuration from its parts.
    pub fn new(jurisdiction: JurisdictionConfig, payroll: PayrollConfig) -> Self {
        Self {
            jurisdiction,
            payroll,
        }
    }

    /// The jurisdiction rule set.
    pub fn jurisdiction(&self) -> &JurisdictionConfig {
        &self.jurisdiction
    }

    /// The payroll run settings.
    pub fn payroll(&self) -> &PayrollConfig {
        &self.payroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_california_defaults() {
        let config = JurisdictionConfig::default();
        assert_eq!(config.jurisdiction.code, "us.california");
        assert_eq!(config.overtime.daily_sesqui_cap(), Decimal::from(4));
        assert_eq!(config.tiers.sesqui, Decimal::new(15, 1));
        assert!(config.overtime.seventh_day_double);
    }

    #[test]
    fn test_payroll_defaults_fill_missing_fields() {
        let config: PayrollConfig = serde_yaml::from_str("enforce_breaks: false").unwrap();
        assert_eq!(config.period_days, 14);
        assert_eq!(config.timecard_pattern, r"^(\d{8})-time\.csv$");
        assert!(!config.enforce_breaks);
    }

    #[test]
    fn test_sesqui_cap_never_negative() {
        let mut rules = JurisdictionConfig::default().overtime;
        rules.daily_double_threshold = Decimal::from(6);
        assert_eq!(rules.daily_sesqui_cap(), Decimal::ZERO);
    }
}
