use crate::domain::model::{PayoutReport, PayoutWarning, Tutor};
use crate::utils::error::{PayoutError, Result};

/// Supplies the validated roster for one payout cycle.
pub trait RosterSource {
    fn collect_roster(&mut self) -> Result<Vec<Tutor>>;
}

pub trait ReportWriter {
    fn write_warnings(&mut self, warnings: &[PayoutWarning]) -> Result<()>;
    fn write_report(&mut self, report: &PayoutReport) -> Result<()>;
    /// Called instead of `write_report` when the payouts do not reconcile.
    fn write_failure(&mut self, error: &PayoutError) -> Result<()>;
}

/// An already-built roster, e.g. one assembled by a caller or a test.
impl RosterSource for Vec<Tutor> {
    fn collect_roster(&mut self) -> Result<Vec<Tutor>> {
        Ok(std::mem::take(self))
    }
}
