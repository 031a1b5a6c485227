//! The legacy plains-and-pyramid generator.
//!
//! Predecessor of the accretion process: a uniform-random plain with a
//! stepped pyramid rising at the grid center. Kept as an alternative
//! strategy selectable through configuration, not as a second entry point.

use rand::Rng;

use crate::error::GenerationError;
use crate::grid::HeightGrid;

/// Configuration for the legacy generator.
#[derive(Clone, Debug)]
pub struct PlainsPyramidParams {
    /// Grid width in cells. Must be a positive power of two.
    pub width: u32,
    /// Grid height in cells. Must be a positive power of two.
    pub height: u32,
    /// Exclusive upper bound of the uniform plain height. Must be at least 1.
    pub plain_ceiling: u8,
    /// Side length of the pyramid footprint, centered on the grid. Must fit
    /// within both dimensions.
    pub pyramid_base: u32,
    /// Width of each pyramid ring in cells. Must be at least 1.
    pub ring_width: u32,
    /// Height gained per ring toward the apex.
    pub ring_step: u8,
}

impl Default for PlainsPyramidParams {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            plain_ceiling: 3,
            pyramid_base: 256,
            ring_width: 8,
            ring_step: 12,
        }
    }
}

impl PlainsPyramidParams {
    /// Check every precondition, failing before any grid is allocated.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if !self.width.is_power_of_two() || !self.height.is_power_of_two() {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.plain_ceiling < 1 {
            return Err(GenerationError::InvalidNoiseCeiling);
        }
        if self.ring_width < 1 {
            return Err(GenerationError::InvalidRingWidth);
        }
        if self.pyramid_base > self.width.min(self.height) {
            return Err(GenerationError::PyramidTooLarge {
                base: self.pyramid_base,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Generates a uniform-random plain with a centered stepped pyramid.
pub struct PlainsPyramidGenerator {
    params: PlainsPyramidParams,
}

impl PlainsPyramidGenerator {
    /// Create a generator, validating all parameters up front.
    pub fn new(params: PlainsPyramidParams) -> Result<Self, GenerationError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Return a reference to the generator parameters.
    pub fn params(&self) -> &PlainsPyramidParams {
        &self.params
    }

    /// Generate the height field: one uniform draw per cell in row-major
    /// order, then the pyramid lift, saturating at 255.
    pub fn generate(&self, rng: &mut impl Rng) -> HeightGrid {
        let p = &self.params;
        let mut grid = HeightGrid::new(p.width, p.height);

        for z in 0..p.height {
            for x in 0..p.width {
                grid.set(x, z, rng.random_range(0..p.plain_ceiling));
            }
        }

        // Stepped pyramid: concentric square rings, one step higher per ring
        // toward the apex.
        let cx = i64::from(p.width / 2);
        let cz = i64::from(p.height / 2);
        let half = i64::from(p.pyramid_base / 2);
        for z in 0..p.height {
            for x in 0..p.width {
                let d = (i64::from(x) - cx).abs().max((i64::from(z) - cz).abs());
                if d < half {
                    let level = (half - d) as u32 / p.ring_width;
                    let lift = (u32::from(p.ring_step) * level).min(255) as u8;
                    grid.set(x, z, grid.get(x, z).saturating_add(lift));
                }
            }
        }
        grid
    }
}
