//! The jurisdiction interface.
//!
//! Each jurisdiction supplies its own overtime and break calculators by
//! implementing [`Jurisdiction`]. New jurisdictions are added by writing a new
//! implementation and registering its code in [`jurisdiction_for`].

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::JurisdictionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DailyTally, EmployeeTimecard, OvertimeTally, Punches, TierMultipliers};

use super::california::California;

/// Overtime and break calculators compliant with one jurisdiction's labor law.
///
/// All calculators take the first day of the first work week and the number
/// of consecutive work weeks to classify.
pub trait Jurisdiction: Send + Sync {
    /// The registry code of the jurisdiction, e.g. `us.california`.
    fn code(&self) -> &str;

    /// Pay multipliers of the regular, time-and-a-half and double tiers.
    fn tiers(&self) -> TierMultipliers;

    /// Classifies the daily hours of one work week into the three tiers.
    ///
    /// `hours[0]` is the first day of the work week, whatever its weekday.
    ///
    /// # Panics
    ///
    /// Panics if the tiers fail to account for the week's hours to within one
    /// second, which can only happen through a defect in the classification.
    fn classify_week(&self, hours: &[Decimal; 7]) -> OvertimeTally;

    /// Classifies the hours worked into one tally per work week.
    fn overtime(
        &self,
        start: NaiveDate,
        workweeks: u32,
        timecard: &EmployeeTimecard,
    ) -> Vec<OvertimeTally>;

    /// Classifies the hours worked one calendar day at a time.
    ///
    /// The stream covers every day of every requested week, including days
    /// without hours, and its weekly sums match [`Jurisdiction::overtime`].
    fn overtime_by_day<'a>(
        &'a self,
        start: NaiveDate,
        workweeks: u32,
        timecard: &'a EmployeeTimecard,
    ) -> Box<dyn Iterator<Item = DailyTally> + 'a>;

    /// Same as [`Jurisdiction::overtime`], after enforcing the mandated breaks.
    fn breaks(
        &self,
        start: NaiveDate,
        workweeks: u32,
        timecard: &EmployeeTimecard,
    ) -> Vec<OvertimeTally>;

    /// The hours worked on `date`, adjusted for mandated breaks not taken.
    fn enforce_breaks(&self, date: NaiveDate, punches: &Punches) -> Decimal;
}

/// Builds the calculator registered for `code`.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::jurisdiction_for;
/// use timecard_engine::config::JurisdictionConfig;
///
/// let california = jurisdiction_for("us.california", &JurisdictionConfig::default()).unwrap();
/// assert_eq!(california.code(), "us.california");
/// assert!(jurisdiction_for("us.oregon", &JurisdictionConfig::default()).is_err());
/// ```
pub fn jurisdiction_for(
    code: &str,
    config: &JurisdictionConfig,
) -> EngineResult<Box<dyn Jurisdiction>> {
    match code {
        California::CODE => Ok(Box::new(California::new(config.clone()))),
        _ => Err(EngineError::UnknownJurisdiction {
            code: code.to_string(),
        }),
    }
}
