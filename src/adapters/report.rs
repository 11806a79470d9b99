use crate::core::{PayoutReport, PayoutWarning, ReportWriter};
use crate::utils::error::{PayoutError, Result};
use std::io::Write;

pub const DIVIDER: &str = "–––––––––––––––––––––––––––––––––––––––––––––––––––––––––––––––––";

/// Plain-text report for a terminal.
pub struct TextReportWriter<W: Write> {
    out: W,
    details: bool,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(out: W, details: bool) -> Self {
        Self { out, details }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_details(&mut self, report: &PayoutReport) -> Result<()> {
        let summary = &report.summary;
        writeln!(self.out, "SUMMARY:")?;
        writeln!(self.out, "\tTeam revenue: ${:.2}", summary.team_revenue)?;
        writeln!(
            self.out,
            "\tAfter transaction fees ({} clients): ${:.2}",
            summary.client_count, summary.after_fees
        )?;
        writeln!(self.out, "\tTotal donations: ${:.2}", summary.total_donations)?;
        writeln!(self.out, "\tDistributable: ${:.2}", summary.distributable)?;
        writeln!(self.out, "\tManagement dividend: ${:.2}", summary.management_dividend)?;
        writeln!(self.out, "\tTeam hours: {}", summary.team_hours)?;
        writeln!(self.out, "GROSS PAYOUTS:")?;
        for payout in &report.payouts {
            writeln!(
                self.out,
                "\t{}: ${:.2} ({} hours)",
                payout.name, payout.gross, payout.hours
            )?;
        }
        Ok(())
    }
}

impl<W: Write> ReportWriter for TextReportWriter<W> {
    fn write_warnings(&mut self, warnings: &[PayoutWarning]) -> Result<()> {
        for warning in warnings {
            match warning {
                PayoutWarning::ManagementRosterMismatch { .. } => {
                    writeln!(self.out, "ERROR: Management team size incorrect.")?;
                    writeln!(self.out, "\tCheck for proper spelling of tutors' names.")?;
                }
            }
        }
        Ok(())
    }

    fn write_report(&mut self, report: &PayoutReport) -> Result<()> {
        writeln!(self.out, "{}", DIVIDER)?;

        if self.details {
            self.write_details(report)?;
        }

        writeln!(self.out, "NET PAYOUTS:")?;
        for payout in &report.payouts {
            writeln!(self.out, "\t{}: ${:.2}", payout.name, payout.net)?;
        }

        writeln!(self.out, "DONATIONS:")?;
        for donation in &report.donations {
            writeln!(
                self.out,
                "\t{}: ${:.2} ({:.1}% donation)",
                donation.organization, donation.amount, donation.percent
            )?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn write_failure(&mut self, error: &PayoutError) -> Result<()> {
        writeln!(self.out, "{}", DIVIDER)?;
        writeln!(self.out, "{}", error.user_friendly_message())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Machine-readable report. Warnings travel inside the report document.
pub struct JsonReportWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_warnings(&mut self, warnings: &[PayoutWarning]) -> Result<()> {
        for warning in warnings {
            tracing::warn!("{}", warning);
        }
        Ok(())
    }

    fn write_report(&mut self, report: &PayoutReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn write_failure(&mut self, error: &PayoutError) -> Result<()> {
        let body = match error {
            PayoutError::Reconciliation {
                expected,
                actual,
                tolerance,
            } => serde_json::json!({
                "error": error.user_friendly_message(),
                "expected": expected,
                "actual": actual,
                "tolerance": tolerance,
            }),
            other => serde_json::json!({ "error": other.to_string() }),
        };
        serde_json::to_writer_pretty(&mut self.out, &body)?;
        writeln!(self.out)?;
        Ok(())
    }
}
