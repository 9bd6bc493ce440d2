pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig, OutputFormat};

pub use crate::core::{
    batch::BatchPipeline,
    calculator::{
        compute_expression, compute_life_path, compute_personality, compute_soul_urge,
        generate_report,
    },
    descriptions::describe,
    engine::{BatchEngine, BatchSummary, ReportEngine},
    session::InMemorySession,
};
pub use crate::domain::model::{FormInput, NumberKind, NumerologyScore, Report};
pub use crate::domain::ports::SessionStore;
pub use crate::utils::error::{NumerologyError, Result};
