//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// World settings.
    pub world: WorldConfig,
    /// Terrain generation settings.
    pub terrain: TerrainConfig,
    /// Colorization settings.
    pub color: ColorConfig,
    /// Map export settings.
    pub export: ExportConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// World settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// World seed all generation streams derive from.
    pub seed: u64,
}

/// Which height-field generator to run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorChoice {
    /// Random-walk accretion (the standard generator).
    Accretion,
    /// The legacy uniform plain with a stepped pyramid.
    PlainsPyramid,
}

/// Terrain generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// The generation strategy.
    pub generator: GeneratorChoice,
    /// Grid width in cells (power of two).
    pub width: u32,
    /// Grid height in cells (power of two).
    pub height: u32,
    /// Restart anchors for the random walk, as `(x, z)` pairs.
    pub seed_centers: Vec<(u32, u32)>,
    /// Cells moved per axis per walk step.
    pub step_size: u32,
    /// Deposit radius around the walker.
    pub splat_radius: u32,
    /// Number of walk steps.
    pub iterations: u32,
    /// Width of the border strip the walker may not enter.
    pub margin: u32,
    /// Exclusive upper bound of the noise floor for untouched cells.
    pub noise_ceiling: u8,
}

/// Colorization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    /// Heights strictly below this value are grass.
    pub grass_threshold: u8,
    /// Exclusive upper bound of per-channel jitter in normalized 0..1 space.
    pub jitter_max: f32,
}

/// Map export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the exported PNG maps are written to.
    pub output_dir: PathBuf,
    /// Write the grayscale height map.
    pub write_height_map: bool,
    /// Write the color map.
    pub write_color_map: bool,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WorldConfig {
    fn default() -> Self {
        Self { seed: 0 }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorChoice::Accretion,
            width: 512,
            height: 512,
            seed_centers: vec![(400, 400), (100, 100), (400, 100)],
            step_size: 3,
            splat_radius: 24,
            iterations: 10_000,
            margin: 50,
            noise_ceiling: 1,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            grass_threshold: 5,
            jitter_max: 1.0 / 20.0,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("maps"),
            write_height_map: true,
            write_color_map: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("width: 512"));
        assert!(ron_str.contains("iterations: 10000"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `color` section entirely.
        let ron_str = "(world: (), terrain: (), export: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.color, ColorConfig::default());
    }

    #[test]
    fn test_default_terrain_matches_documented_defaults() {
        let terrain = TerrainConfig::default();
        assert_eq!(terrain.generator, GeneratorChoice::Accretion);
        assert_eq!(terrain.seed_centers, vec![(400, 400), (100, 100), (400, 100)]);
        assert_eq!(terrain.step_size, 3);
        assert_eq!(terrain.splat_radius, 24);
        assert_eq!(terrain.margin, 50);
    }

    #[test]
    fn test_generator_choice_snake_case() {
        let choice: GeneratorChoice = ron::from_str("plains_pyramid").unwrap();
        assert_eq!(choice, GeneratorChoice::PlainsPyramid);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.seed = 777;
        config.terrain.iterations = 50_000;
        config.export.output_dir = PathBuf::from("out/maps");

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "(world: (seed: ))").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
