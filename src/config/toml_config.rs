use crate::config::policy::PayoutPolicy;
use crate::core::pricing::PricingTable;
use crate::core::PricingPlan;
use crate::utils::error::{PayoutError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Policy overrides read from TOML. Every field is optional; anything left out
/// keeps its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyFile {
    pub fees: Option<FeesConfig>,
    pub donations: Option<DonationsConfig>,
    pub management: Option<ManagementConfig>,
    pub pricing: Option<PricingConfig>,
    pub reconciliation: Option<ReconciliationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeesConfig {
    pub transaction_percent: Option<f64>,
    pub per_card: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DonationsConfig {
    pub percent_per_organization: Option<f64>,
    pub organizations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManagementConfig {
    pub team: Option<Vec<String>>,
    pub fee_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    pub ms: Option<f64>,
    #[serde(rename = "hsPrep")]
    pub hs_prep: Option<f64>,
    pub hs: Option<f64>,
    #[serde(rename = "collPrep")]
    pub coll_prep: Option<f64>,
    #[serde(rename = "hsSplit")]
    pub hs_split: Option<f64>,
    pub biweekly_discount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReconciliationConfig {
    pub tolerance: Option<f64>,
}

impl PolicyFile {
    /// 從 TOML 檔案載入政策
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PayoutError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析政策
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PayoutError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MANAGER_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PayoutError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Applies the overrides on top of the default policy and validates the result.
    pub fn into_policy(self) -> Result<PayoutPolicy> {
        let mut policy = PayoutPolicy::default();

        if let Some(fees) = self.fees {
            if let Some(percent) = fees.transaction_percent {
                policy.transaction_fee_percent = percent;
            }
            if let Some(per_card) = fees.per_card {
                policy.per_card_fee = per_card;
            }
        }

        if let Some(donations) = self.donations {
            if let Some(percent) = donations.percent_per_organization {
                policy.donation_percent_per_organization = percent;
            }
            if let Some(organizations) = donations.organizations {
                policy.organizations = organizations;
            }
        }

        if let Some(management) = self.management {
            if let Some(team) = management.team {
                policy.management_team = team;
            }
            if let Some(fee_percent) = management.fee_percent {
                policy.management_fee_percent = fee_percent;
            }
        }

        if let Some(pricing) = self.pricing {
            policy.pricing = pricing.apply(policy.pricing);
        }

        if let Some(tolerance) = self.reconciliation.and_then(|r| r.tolerance) {
            policy.reconciliation_tolerance = tolerance;
        }

        policy.validate()?;
        Ok(policy)
    }
}

impl PricingConfig {
    fn apply(&self, table: PricingTable) -> PricingTable {
        let overrides = [
            (PricingPlan::Ms, self.ms),
            (PricingPlan::HsPrep, self.hs_prep),
            (PricingPlan::Hs, self.hs),
            (PricingPlan::CollPrep, self.coll_prep),
            (PricingPlan::HsSplit, self.hs_split),
        ];

        let table = overrides
            .into_iter()
            .fold(table, |table, (plan, rate)| match rate {
                Some(rate) => table.with_rate(plan, rate),
                None => table,
            });

        match self.biweekly_discount {
            Some(discount) => {
                let rates = PricingPlan::ALL.map(|plan| table.base_rate(plan));
                PricingTable::new(rates, discount)
            }
            None => table,
        }
    }
}

/// Loads the policy from `path` when given, otherwise the built-in defaults.
pub fn load_policy(path: Option<&Path>) -> Result<PayoutPolicy> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading payout policy from: {}", path.display());
            PolicyFile::from_file(path)?.into_policy()
        }
        None => {
            tracing::debug!("Using built-in payout policy");
            let policy = PayoutPolicy::default();
            policy.validate()?;
            Ok(policy)
        }
    }
}
