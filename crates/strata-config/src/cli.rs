//! Command-line argument parsing for the Strata terrain generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;
use crate::config::GeneratorChoice;

/// Strata terrain generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "strata", about = "Strata terrain generator")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Grid width in cells (power of two).
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in cells (power of two).
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of random-walk steps.
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Generation strategy (accretion, plains-pyramid).
    #[arg(long, value_enum)]
    pub generator: Option<GeneratorCli>,

    /// Directory for exported PNG maps.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Clap-facing mirror of [`GeneratorChoice`].
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum GeneratorCli {
    /// Random-walk accretion.
    Accretion,
    /// Legacy plains and pyramid.
    PlainsPyramid,
}

impl From<GeneratorCli> for GeneratorChoice {
    fn from(value: GeneratorCli) -> Self {
        match value {
            GeneratorCli::Accretion => GeneratorChoice::Accretion,
            GeneratorCli::PlainsPyramid => GeneratorChoice::PlainsPyramid,
        }
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(w) = args.width {
            self.terrain.width = w;
        }
        if let Some(h) = args.height {
            self.terrain.height = h;
        }
        if let Some(iterations) = args.iterations {
            self.terrain.iterations = iterations;
        }
        if let Some(generator) = args.generator {
            self.terrain.generator = generator.into();
        }
        if let Some(ref dir) = args.output_dir {
            self.export.output_dir = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            seed: None,
            width: None,
            height: None,
            iterations: None,
            generator: None,
            output_dir: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(1234),
            iterations: Some(25_000),
            generator: Some(GeneratorCli::PlainsPyramid),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.world.seed, 1234);
        assert_eq!(config.terrain.iterations, 25_000);
        assert_eq!(config.terrain.generator, GeneratorChoice::PlainsPyramid);
        // Non-overridden fields retain defaults.
        assert_eq!(config.terrain.width, 512);
        assert_eq!(config.terrain.margin, 50);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }
}
