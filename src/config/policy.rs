use crate::core::pricing::PricingTable;
use crate::core::PricingPlan;
use crate::utils::error::{PayoutError, Result};
use crate::utils::validation::{self, Validate};
use serde::Serialize;

pub const TRANSACTION_FEE_PERCENT: f64 = 2.9;
pub const PER_CARD_FEE: f64 = 0.30;
pub const DONATION_PERCENT_PER_ORGANIZATION: f64 = 2.5;
pub const MANAGEMENT_FEE_PERCENT: f64 = 10.0;
pub const RECONCILIATION_TOLERANCE: f64 = 0.05;

/// Immutable parameters for one payout run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutPolicy {
    pub transaction_fee_percent: f64,
    pub per_card_fee: f64,
    pub donation_percent_per_organization: f64,
    pub organizations: Vec<String>,
    pub management_team: Vec<String>,
    pub management_fee_percent: f64,
    pub reconciliation_tolerance: f64,
    pub pricing: PricingTable,
}

impl Default for PayoutPolicy {
    fn default() -> Self {
        Self {
            transaction_fee_percent: TRANSACTION_FEE_PERCENT,
            per_card_fee: PER_CARD_FEE,
            donation_percent_per_organization: DONATION_PERCENT_PER_ORGANIZATION,
            organizations: vec![
                "No Kid Hungry".to_string(),
                "NAACP Legal Defense Fund".to_string(),
            ],
            management_team: vec!["Jarett".to_string()],
            management_fee_percent: MANAGEMENT_FEE_PERCENT,
            reconciliation_tolerance: RECONCILIATION_TOLERANCE,
            pricing: PricingTable::default(),
        }
    }
}

impl PayoutPolicy {
    pub fn organization_count(&self) -> usize {
        self.organizations.len()
    }

    pub fn management_team_size(&self) -> usize {
        self.management_team.len()
    }

    pub fn total_donation_percent(&self) -> f64 {
        self.organization_count() as f64 * self.donation_percent_per_organization
    }

    /// Case-insensitive match against the management roster.
    pub fn is_management(&self, tutor_name: &str) -> bool {
        let name = tutor_name.trim();
        self.management_team
            .iter()
            .any(|member| member.eq_ignore_ascii_case(name))
    }
}

impl Validate for PayoutPolicy {
    fn validate(&self) -> Result<()> {
        validation::validate_percentage("fees.transaction_percent", self.transaction_fee_percent)?;
        validation::validate_non_negative("fees.per_card", self.per_card_fee)?;
        validation::validate_percentage(
            "donations.percent_per_organization",
            self.donation_percent_per_organization,
        )?;
        validation::validate_name_list("donations.organizations", &self.organizations, true)?;

        if self.total_donation_percent() >= 100.0 {
            return Err(PayoutError::ConfigValidationError {
                field: "donations".to_string(),
                message: format!(
                    "Donations would take {:.1}% of revenue, leaving nothing to distribute",
                    self.total_donation_percent()
                ),
            });
        }

        validation::validate_name_list("management.team", &self.management_team, false)?;
        validation::validate_percentage("management.fee_percent", self.management_fee_percent)?;
        validation::validate_positive("reconciliation.tolerance", self.reconciliation_tolerance)?;

        validation::validate_non_negative(
            "pricing.biweekly_discount",
            self.pricing.biweekly_discount(),
        )?;
        for plan in PricingPlan::ALL {
            for biweekly in [false, true] {
                let field = if biweekly {
                    format!("pricing.{} (biweekly)", plan)
                } else {
                    format!("pricing.{}", plan)
                };
                validation::validate_positive(&field, self.pricing.weekly_cost(plan, biweekly))?;
            }
        }

        Ok(())
    }
}
