use crate::utils::error::{PayoutError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of pricing plans offered to students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PricingPlan {
    #[serde(rename = "ms")]
    Ms,
    #[serde(rename = "hsPrep")]
    HsPrep,
    #[serde(rename = "hs")]
    Hs,
    #[serde(rename = "collPrep")]
    CollPrep,
    #[serde(rename = "hsSplit")]
    HsSplit,
}

impl PricingPlan {
    pub const COUNT: usize = 5;

    pub const ALL: [PricingPlan; Self::COUNT] = [
        PricingPlan::Ms,
        PricingPlan::HsPrep,
        PricingPlan::Hs,
        PricingPlan::CollPrep,
        PricingPlan::HsSplit,
    ];

    pub fn identifier(self) -> &'static str {
        match self {
            PricingPlan::Ms => "ms",
            PricingPlan::HsPrep => "hsPrep",
            PricingPlan::Hs => "hs",
            PricingPlan::CollPrep => "collPrep",
            PricingPlan::HsSplit => "hsSplit",
        }
    }

    /// Position of the plan in [`PricingPlan::ALL`], used to index rate tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// `ms/hsPrep/hs/collPrep/hsSplit`, as shown in intake prompts.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|plan| plan.identifier())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for PricingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for PricingPlan {
    type Err = PayoutError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|plan| plan.identifier().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PayoutError::InvalidPlan {
                value: trimmed.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub weekly_cost: f64,
    pub payments_processed: u32,
    pub biweekly: bool,
}

impl Student {
    /// Rejects a non-positive weekly cost instead of letting it reach the revenue sums.
    pub fn new(
        name: impl Into<String>,
        weekly_cost: f64,
        payments_processed: u32,
        biweekly: bool,
    ) -> Result<Self> {
        let name = name.into();
        if !weekly_cost.is_finite() || weekly_cost <= 0.0 {
            return Err(PayoutError::InvalidWeeklyCost {
                student: name,
                cost: weekly_cost,
            });
        }

        Ok(Self {
            name,
            weekly_cost,
            payments_processed,
            biweekly,
        })
    }

    pub fn billed(&self) -> f64 {
        self.weekly_cost * f64::from(self.payments_processed)
    }

    /// A biweekly payment covers two hour-long sessions.
    pub fn hours(&self) -> u64 {
        let per_payment = if self.biweekly { 2 } else { 1 };
        u64::from(self.payments_processed) * per_payment
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub name: String,
    /// Intake order.
    pub students: Vec<Student>,
}

impl Tutor {
    pub fn new(name: impl Into<String>, students: Vec<Student>) -> Self {
        Self {
            name: name.into(),
            students,
        }
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorPayout {
    pub name: String,
    pub hours: u64,
    pub gross: f64,
    pub net: f64,
    pub management: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Donation {
    pub organization: String,
    pub amount: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSummary {
    pub team_revenue: f64,
    pub team_hours: u64,
    pub client_count: usize,
    pub after_fees: f64,
    pub total_donations: f64,
    pub distributable: f64,
    pub management_dividend: f64,
}

/// Conditions that are reported but do not stop the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayoutWarning {
    ManagementRosterMismatch { expected: usize, found: usize },
}

impl fmt::Display for PayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoutWarning::ManagementRosterMismatch { expected, found } => write!(
                f,
                "management team has {} member(s) but {} tutor(s) matched",
                expected, found
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutReport {
    pub generated_at: DateTime<Utc>,
    pub summary: RevenueSummary,
    pub payouts: Vec<TutorPayout>,
    pub donations: Vec<Donation>,
    pub warnings: Vec<PayoutWarning>,
}

impl PayoutReport {
    pub fn total_net(&self) -> f64 {
        self.payouts.iter().map(|p| p.net).sum()
    }

    pub fn net_payouts(&self) -> Vec<f64> {
        self.payouts.iter().map(|p| p.net).collect()
    }
}
