//! Random-walk accretion: the stochastic process that builds the height field.
//!
//! A walker anchored at seed centers performs a coin-flip random walk over
//! the grid. Every step that stays inside the safe interior deposits one
//! count on all cells within the splat radius; a step that leaves the
//! interior is discarded and the walker restarts at a randomly chosen seed
//! center. Resetting instead of clamping keeps the accretion concentrated
//! near the centers, producing ridge- and dune-like formations rather than
//! one unbounded walk.

use rand::Rng;

use crate::error::GenerationError;
use crate::grid::HeightGrid;

/// A fixed `(x, z)` anchor the walker restarts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedCenter {
    /// Column of the anchor cell.
    pub x: u32,
    /// Row of the anchor cell.
    pub z: u32,
}

impl SeedCenter {
    /// Create an anchor at `(x, z)`.
    pub const fn new(x: u32, z: u32) -> Self {
        Self { x, z }
    }
}

/// Configuration for the accretion generator.
#[derive(Clone, Debug)]
pub struct AccretionParams {
    /// Grid width in cells. Must be a positive power of two.
    pub width: u32,
    /// Grid height in cells. Must be a positive power of two.
    pub height: u32,
    /// Restart anchors for the walk. Must be non-empty, each strictly inside
    /// the safe interior `[margin, dimension - margin)` on both axes.
    pub seed_centers: Vec<SeedCenter>,
    /// Cells moved per axis per step. Must be at least 1.
    pub step_size: u32,
    /// Deposit radius around the walker, inclusive, in Euclidean distance.
    pub splat_radius: u32,
    /// Number of walk steps.
    pub iterations: u32,
    /// Width of the border strip the walker may not enter. Must be at least
    /// `splat_radius + step_size` so a splat never has to reach outside the
    /// grid.
    pub margin: u32,
    /// Exclusive upper bound of the noise floor drawn for cells the walk
    /// never touched. Must be at least 1; the default of 1 pins the floor
    /// at exactly 0.
    pub noise_ceiling: u8,
}

impl Default for AccretionParams {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            seed_centers: vec![
                SeedCenter::new(400, 400),
                SeedCenter::new(100, 100),
                SeedCenter::new(400, 100),
            ],
            step_size: 3,
            splat_radius: 24,
            iterations: 10_000,
            margin: 50,
            noise_ceiling: 1,
        }
    }
}

impl AccretionParams {
    /// Check every precondition, failing before any grid is allocated.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if !self.width.is_power_of_two() || !self.height.is_power_of_two() {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.step_size < 1 {
            return Err(GenerationError::InvalidStepSize);
        }
        if self.noise_ceiling < 1 {
            return Err(GenerationError::InvalidNoiseCeiling);
        }
        if self.margin < self.splat_radius + self.step_size {
            return Err(GenerationError::MarginTooSmall {
                margin: self.margin,
                splat_radius: self.splat_radius,
                step_size: self.step_size,
            });
        }
        if self.seed_centers.is_empty() {
            return Err(GenerationError::NoSeedCenters);
        }
        for center in &self.seed_centers {
            if !self.in_interior(i64::from(center.x), i64::from(center.z)) {
                return Err(GenerationError::SeedCenterOutsideInterior {
                    x: center.x,
                    z: center.z,
                    margin: self.margin,
                });
            }
        }
        Ok(())
    }

    /// Whether `(x, z)` lies inside the safe interior,
    /// `[margin, dimension - margin)` on both axes.
    fn in_interior(&self, x: i64, z: i64) -> bool {
        let m = i64::from(self.margin);
        x >= m
            && x < i64::from(self.width) - m
            && z >= m
            && z < i64::from(self.height) - m
    }
}

/// Runs the random-walk splatting process to produce a [`HeightGrid`].
pub struct AccretionGenerator {
    params: AccretionParams,
}

impl AccretionGenerator {
    /// Create a generator, validating all parameters up front.
    pub fn new(params: AccretionParams) -> Result<Self, GenerationError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Return a reference to the generator parameters.
    pub fn params(&self) -> &AccretionParams {
        &self.params
    }

    /// Generate the height field.
    ///
    /// Deterministic for a given RNG stream and parameter set. Draw order
    /// per iteration: x-axis coin, z-axis coin, then (only on an interior
    /// exit) the restart center index. After the walk, one noise-floor draw
    /// per still-zero cell, in row-major order.
    pub fn generate(&self, rng: &mut impl Rng) -> HeightGrid {
        let p = &self.params;
        let mut grid = HeightGrid::new(p.width, p.height);
        let step = i64::from(p.step_size);

        let (mut wx, mut wz) = self.random_center(rng);
        for _ in 0..p.iterations {
            wx += if rng.random_bool(0.5) { step } else { -step };
            wz += if rng.random_bool(0.5) { step } else { -step };

            if !p.in_interior(wx, wz) {
                // Discard the excursion: the out-of-bounds position is never
                // splatted.
                (wx, wz) = self.random_center(rng);
                continue;
            }
            splat(&mut grid, wx, wz, p.splat_radius);
        }

        for z in 0..p.height {
            for x in 0..p.width {
                if grid.get(x, z) == 0 {
                    let floor = rng.random_range(0..p.noise_ceiling);
                    grid.set(x, z, floor);
                }
            }
        }
        grid
    }

    fn random_center(&self, rng: &mut impl Rng) -> (i64, i64) {
        let center = self.params.seed_centers[rng.random_range(0..self.params.seed_centers.len())];
        (i64::from(center.x), i64::from(center.z))
    }
}

/// Increment every in-grid cell within `radius` (inclusive, Euclidean) of
/// `(wx, wz)` by one, saturating at 255. Cells outside the grid are skipped
/// silently.
fn splat(grid: &mut HeightGrid, wx: i64, wz: i64, radius: u32) {
    let r = i64::from(radius);
    let r2 = r * r;
    let x0 = (wx - r).max(0);
    let x1 = (wx + r).min(i64::from(grid.width()) - 1);
    let z0 = (wz - r).max(0);
    let z1 = (wz + r).min(i64::from(grid.height()) - 1);

    for z in z0..=z1 {
        for x in x0..=x1 {
            let dx = x - wx;
            let dz = z - wz;
            if dx * dx + dz * dz <= r2 {
                grid.accrete(x as u32, z as u32);
            }
        }
    }
}
