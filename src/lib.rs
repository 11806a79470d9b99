pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleIntake, JsonReportWriter, TextReportWriter};
pub use config::{policy::PayoutPolicy, toml_config::load_policy, OutputFormat};
pub use core::engine::PayoutEngine;
pub use domain::model::{PayoutReport, PayoutWarning, PricingPlan, Student, Tutor};
pub use utils::error::{PayoutError, Result};
