pub mod policy;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tutor-payout")]
#[command(about = "Weekly payout and donation calculator for a tutoring team")]
pub struct CliConfig {
    /// Path to a TOML policy file overriding fees, donations, management team or pricing
    #[arg(long)]
    pub policy: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Print the revenue breakdown before the payouts")]
    pub details: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
