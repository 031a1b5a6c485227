//! Procedural terrain surface synthesis: random-walk accretion, threshold
//! colorization, and row-major linearization for the texture-upload boundary.

mod accretion;
mod colorize;
mod error;
mod grid;
mod legacy;
mod pipeline;
mod rng;

pub use accretion::{AccretionGenerator, AccretionParams, SeedCenter};
pub use colorize::{Band, ColorizeParams, GrassTone, ThresholdColorizer, classify};
pub use error::GenerationError;
pub use grid::{ColorGrid, HeightGrid, Rgb};
pub use legacy::{PlainsPyramidGenerator, PlainsPyramidParams};
pub use pipeline::{GeneratorKind, PipelineParams, TerrainMaps, generate_maps};
pub use rng::{GenStage, derive_stage_seed, stage_rng};
