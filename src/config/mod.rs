pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_present, validate_range, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

pub const MAX_LATENCY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "numerology-report"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Compute life path, expression, soul urge and personality numbers")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, help = "Full name"))]
    pub name: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Birth date, e.g. 1990-07-14"))]
    pub birth_date: String,

    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value_t = OutputFormat::Text))]
    pub format: OutputFormat,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "0", help = "Artificial delay before the report is shown")
    )]
    pub latency_ms: u64,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_present("name", &self.name)?;
        validate_present("birth date", &self.birth_date)?;
        validate_range("latency_ms", self.latency_ms, 0, MAX_LATENCY_MS)?;
        Ok(())
    }
}
