//! The one-shot terrain synthesis pipeline.
//!
//! Composes the seeded random source, the configured height-field generator,
//! and the threshold colorizer into a single synchronous pass, invoked once
//! at world initialization (or on an explicit regeneration request). The
//! produced maps are read-only; regeneration replaces them wholesale.

use crate::accretion::{AccretionGenerator, AccretionParams};
use crate::colorize::{ColorizeParams, ThresholdColorizer};
use crate::error::GenerationError;
use crate::grid::{ColorGrid, HeightGrid};
use crate::legacy::{PlainsPyramidGenerator, PlainsPyramidParams};
use crate::rng::{GenStage, stage_rng};

/// The height-field generation strategy, selected by configuration.
#[derive(Clone, Debug)]
pub enum GeneratorKind {
    /// Random-walk accretion, the standard generator.
    Accretion(AccretionParams),
    /// The legacy uniform plain with a stepped pyramid.
    PlainsPyramid(PlainsPyramidParams),
}

/// Parameters for one full generation run.
#[derive(Clone, Debug)]
pub struct PipelineParams {
    /// World seed all stage streams derive from.
    pub seed: u64,
    /// The height-field generator to run.
    pub generator: GeneratorKind,
    /// Colorizer settings.
    pub colorize: ColorizeParams,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            seed: 0,
            generator: GeneratorKind::Accretion(AccretionParams::default()),
            colorize: ColorizeParams::default(),
        }
    }
}

/// The two raster outputs of a generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainMaps {
    /// The accumulated height field.
    pub heights: HeightGrid,
    /// The color field derived from it.
    pub colors: ColorGrid,
}

impl TerrainMaps {
    /// Returns `(width, height)`, identical for both maps.
    pub fn dimensions(&self) -> (u32, u32) {
        self.heights.dimensions()
    }

    /// The stored height at integer grid coordinates, or `None` out of
    /// bounds.
    ///
    /// No interpolation happens here: smoothing for fractional world
    /// coordinates is the consumer's responsibility.
    pub fn surface_height(&self, x: u32, z: u32) -> Option<u8> {
        let (width, height) = self.heights.dimensions();
        if x < width && z < height {
            Some(self.heights.get(x, z))
        } else {
            None
        }
    }
}

/// Run the full pipeline once: validate, generate the height field, derive
/// the color field.
///
/// Fails fast on invalid parameters; no partial grid is ever returned. Each
/// stage draws from its own seed-derived stream, so two runs with the same
/// parameters and seed produce bit-identical maps.
pub fn generate_maps(params: &PipelineParams) -> Result<TerrainMaps, GenerationError> {
    let heights = match &params.generator {
        GeneratorKind::Accretion(p) => {
            let generator = AccretionGenerator::new(p.clone())?;
            let mut rng = stage_rng(params.seed, GenStage::Accretion);
            generator.generate(&mut rng)
        }
        GeneratorKind::PlainsPyramid(p) => {
            let generator = PlainsPyramidGenerator::new(p.clone())?;
            let mut rng = stage_rng(params.seed, GenStage::Legacy);
            generator.generate(&mut rng)
        }
    };

    let mut rng = stage_rng(params.seed, GenStage::Colorize);
    let colors = ThresholdColorizer::new(params.colorize.clone()).colorize(&heights, &mut rng);

    Ok(TerrainMaps { heights, colors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accretion::SeedCenter;

    #[test]
    fn test_pipeline_is_deterministic() {
        let params = PipelineParams {
            seed: 42,
            ..Default::default()
        };
        let maps_a = generate_maps(&params).unwrap();
        let maps_b = generate_maps(&params).unwrap();
        assert_eq!(
            maps_a, maps_b,
            "Same seed and parameters must produce bit-identical maps"
        );
    }

    #[test]
    fn test_different_seeds_produce_different_maps() {
        let maps_a = generate_maps(&PipelineParams {
            seed: 1,
            ..Default::default()
        })
        .unwrap();
        let maps_b = generate_maps(&PipelineParams {
            seed: 2,
            ..Default::default()
        })
        .unwrap();
        assert_ne!(maps_a.heights, maps_b.heights);
    }

    #[test]
    fn test_maps_share_dimensions() {
        let maps = generate_maps(&PipelineParams::default()).unwrap();
        assert_eq!(maps.heights.dimensions(), maps.colors.dimensions());
        assert_eq!(maps.dimensions(), (512, 512));
    }

    #[test]
    fn test_invalid_params_fail_without_maps() {
        let params = PipelineParams {
            seed: 0,
            generator: GeneratorKind::Accretion(AccretionParams {
                seed_centers: vec![SeedCenter::new(10, 10)],
                ..Default::default()
            }),
            colorize: ColorizeParams::default(),
        };
        assert!(matches!(
            generate_maps(&params),
            Err(GenerationError::SeedCenterOutsideInterior { .. })
        ));
    }

    #[test]
    fn test_legacy_strategy_runs_through_pipeline() {
        let params = PipelineParams {
            seed: 3,
            generator: GeneratorKind::PlainsPyramid(PlainsPyramidParams::default()),
            colorize: ColorizeParams::default(),
        };
        let maps = generate_maps(&params).unwrap();
        assert_eq!(maps.dimensions(), (512, 512));
        // The apex is tall enough to leave the grass/brown bands.
        assert!(maps.heights.get(256, 256) >= 170);
    }

    #[test]
    fn test_surface_height_query() {
        let maps = generate_maps(&PipelineParams::default()).unwrap();
        assert_eq!(
            maps.surface_height(400, 400),
            Some(maps.heights.get(400, 400))
        );
        assert_eq!(maps.surface_height(512, 0), None);
        assert_eq!(maps.surface_height(0, 512), None);
    }

    #[test]
    fn test_linearized_outputs_match_texture_boundary_shape() {
        let maps = generate_maps(&PipelineParams::default()).unwrap();
        assert_eq!(maps.heights.to_grayscale_rgba().len(), 512 * 512 * 4);
        assert_eq!(maps.colors.to_rgba().len(), 512 * 512 * 4);
        assert_eq!(maps.heights.linearize().len(), 512 * 512);
        assert_eq!(maps.colors.linearize().len(), 512 * 512 * 3);
    }
}
