//! Configuration system for the Strata terrain generator.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap and forward/backward compatible
//! serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    ColorConfig, Config, DebugConfig, ExportConfig, GeneratorChoice, TerrainConfig, WorldConfig,
};
pub use error::ConfigError;
