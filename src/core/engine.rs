use crate::config::policy::PayoutPolicy;
use crate::core::{fees, payout, reconcile, revenue};
use crate::core::{PayoutReport, ReportWriter, RosterSource, Tutor};
use crate::domain::model::{Donation, RevenueSummary};
use crate::utils::error::Result;
use chrono::Utc;

/// Drives intake, calculation, reconciliation and reporting for one cycle.
pub struct PayoutEngine {
    policy: PayoutPolicy,
}

impl PayoutEngine {
    pub fn new(policy: PayoutPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PayoutPolicy {
        &self.policy
    }

    /// Computes payouts and donations without checking that they reconcile.
    pub fn calculate(&self, tutors: &[Tutor]) -> Result<PayoutReport> {
        let fees = fees::compute(tutors, &self.policy);
        let allocation = payout::allocate(tutors, fees.distributable, &self.policy)?;

        let donations = self
            .policy
            .organizations
            .iter()
            .map(|organization| Donation {
                organization: organization.clone(),
                amount: fees.donation_per_organization,
                percent: self.policy.donation_percent_per_organization,
            })
            .collect();

        Ok(PayoutReport {
            generated_at: Utc::now(),
            summary: RevenueSummary {
                team_revenue: fees.team_revenue,
                team_hours: revenue::team_hours(tutors),
                client_count: fees.client_count,
                after_fees: fees.after_fees,
                total_donations: fees.total_donations,
                distributable: fees.distributable,
                management_dividend: allocation.dividend_pool,
            },
            payouts: allocation.payouts,
            donations,
            warnings: allocation.warnings,
        })
    }

    pub fn reconcile(&self, report: &PayoutReport) -> Result<()> {
        reconcile::reconcile(
            &report.net_payouts(),
            report.summary.total_donations,
            report.summary.after_fees,
            self.policy.reconciliation_tolerance,
        )
    }

    /// Calculates and reconciles; the report is only returned when the books balance.
    pub fn compute(&self, tutors: &[Tutor]) -> Result<PayoutReport> {
        let report = self.calculate(tutors)?;
        self.reconcile(&report)?;
        Ok(report)
    }

    pub fn run<S, W>(&self, source: &mut S, writer: &mut W) -> Result<PayoutReport>
    where
        S: RosterSource,
        W: ReportWriter,
    {
        // Intake
        let tutors = source.collect_roster()?;
        tracing::info!(
            "Collected {} tutors with {} students",
            tutors.len(),
            revenue::client_count(&tutors)
        );

        // Aggregate, fees, allocation
        let report = match self.calculate(&tutors) {
            Ok(report) => report,
            Err(e) => {
                writer.write_failure(&e)?;
                return Err(e);
            }
        };
        writer.write_warnings(&report.warnings)?;

        // Reconcile and report
        if let Err(e) = self.reconcile(&report) {
            writer.write_failure(&e)?;
            return Err(e);
        }
        writer.write_report(&report)?;
        tracing::info!(
            "Reported {} payouts totalling {:.2}",
            report.payouts.len(),
            report.total_net()
        );

        Ok(report)
    }
}
