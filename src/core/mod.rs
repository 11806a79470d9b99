pub mod engine;
pub mod fees;
pub mod payout;
pub mod pricing;
pub mod reconcile;
pub mod revenue;

pub use crate::domain::model::{PayoutReport, PayoutWarning, PricingPlan, Student, Tutor};
pub use crate::domain::ports::{ReportWriter, RosterSource};
pub use crate::utils::error::Result;
