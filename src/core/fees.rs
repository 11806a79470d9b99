use crate::config::policy::PayoutPolicy;
use crate::core::revenue;
use crate::core::Tutor;

/// Revenue after processing fees and charitable donations.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeBreakdown {
    pub team_revenue: f64,
    pub client_count: usize,
    pub after_fees: f64,
    pub donation_per_organization: f64,
    pub total_donations: f64,
    pub distributable: f64,
}

/// Percentage fee on gross revenue plus one flat card fee per client.
pub fn after_transaction_fees(team_revenue: f64, client_count: usize, policy: &PayoutPolicy) -> f64 {
    team_revenue * (1.0 - policy.transaction_fee_percent / 100.0)
        - policy.per_card_fee * client_count as f64
}

pub fn donation_per_organization(after_fees: f64, policy: &PayoutPolicy) -> f64 {
    after_fees * policy.donation_percent_per_organization / 100.0
}

pub fn distributable_revenue(after_fees: f64, policy: &PayoutPolicy) -> f64 {
    after_fees * (100.0 - policy.total_donation_percent()) / 100.0
}

pub fn compute(tutors: &[Tutor], policy: &PayoutPolicy) -> FeeBreakdown {
    let team_revenue = revenue::team_revenue(tutors);
    let client_count = revenue::client_count(tutors);
    let after_fees = after_transaction_fees(team_revenue, client_count, policy);
    let donation_per_organization = donation_per_organization(after_fees, policy);

    let breakdown = FeeBreakdown {
        team_revenue,
        client_count,
        after_fees,
        donation_per_organization,
        total_donations: donation_per_organization * policy.organization_count() as f64,
        distributable: distributable_revenue(after_fees, policy),
    };

    tracing::debug!(
        "Revenue {:.2} from {} clients, {:.2} after fees, {:.2} distributable",
        breakdown.team_revenue,
        breakdown.client_count,
        breakdown.after_fees,
        breakdown.distributable
    );

    breakdown
}
