use crate::core::PricingPlan;
use crate::utils::error::{PayoutError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIWEEKLY_DISCOUNT: f64 = 9.0;

/// Weekly rates keyed by [`PricingPlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    rates: [f64; PricingPlan::COUNT],
    biweekly_discount: f64,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            // ms, hsPrep, hs, collPrep, hsSplit; hsSplit is half the 109 bundled hs
            // rate kept as 54.5 rather than truncated to 54
            rates: [39.0, 49.0, 59.0, 79.0, 54.5],
            biweekly_discount: DEFAULT_BIWEEKLY_DISCOUNT,
        }
    }
}

impl PricingTable {
    pub fn new(rates: [f64; PricingPlan::COUNT], biweekly_discount: f64) -> Self {
        Self {
            rates,
            biweekly_discount,
        }
    }

    pub fn with_rate(mut self, plan: PricingPlan, rate: f64) -> Self {
        self.rates[plan.index()] = rate;
        self
    }

    pub fn base_rate(&self, plan: PricingPlan) -> f64 {
        self.rates[plan.index()]
    }

    pub fn biweekly_discount(&self) -> f64 {
        self.biweekly_discount
    }

    /// Biweekly sessions are billed as a two-week bundle: `base * 2 - discount`.
    pub fn weekly_cost(&self, plan: PricingPlan, biweekly: bool) -> f64 {
        let base = self.base_rate(plan);
        if biweekly {
            base * 2.0 - self.biweekly_discount
        } else {
            base
        }
    }

    /// Resolves a plan identifier typed by a user and checks the resulting cost.
    pub fn weekly_cost_for(&self, identifier: &str, biweekly: bool) -> Result<f64> {
        let plan: PricingPlan = identifier.parse()?;
        let cost = self.weekly_cost(plan, biweekly);
        if !cost.is_finite() || cost <= 0.0 {
            return Err(PayoutError::InvalidWeeklyCost {
                student: format!("plan {}", plan),
                cost,
            });
        }
        Ok(cost)
    }
}
