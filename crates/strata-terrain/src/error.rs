//! Terrain generation error types.

/// Errors raised by parameter validation, before any grid is allocated.
///
/// Once parameters validate, generation itself has no recoverable failure
/// modes: every branch of the walk, splat, and band classification is total
/// over its input domain.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Grid dimensions must be positive powers of two for mipmap-friendly
    /// texture upload.
    #[error("grid dimensions must be positive powers of two, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The random walk needs at least one restart anchor.
    #[error("seed center list is empty")]
    NoSeedCenters,

    /// A seed center must lie strictly inside the safe interior region.
    #[error("seed center ({x}, {z}) is outside the safe interior [{margin}, dimension - {margin})")]
    SeedCenterOutsideInterior { x: u32, z: u32, margin: u32 },

    /// The walker must move at least one cell per step.
    #[error("step size must be at least 1")]
    InvalidStepSize,

    /// Untouched cells draw their noise floor from `[0, noise_ceiling)`,
    /// which must be a non-empty range.
    #[error("noise ceiling must be at least 1")]
    InvalidNoiseCeiling,

    /// The interior margin must cover one full splat plus one step.
    #[error("margin {margin} is smaller than splat radius {splat_radius} + step size {step_size}")]
    MarginTooSmall {
        margin: u32,
        splat_radius: u32,
        step_size: u32,
    },

    /// The stepped pyramid base must fit inside the grid.
    #[error("pyramid base {base} does not fit in a {width}x{height} grid")]
    PyramidTooLarge { base: u32, width: u32, height: u32 },

    /// Pyramid rings must be at least one cell wide.
    #[error("pyramid ring width must be at least 1")]
    InvalidRingWidth,

    /// A linear buffer does not match the declared grid dimensions.
    #[error("buffer of length {len} does not match a {width}x{height} grid (expected {expected})")]
    LengthMismatch {
        len: usize,
        width: u32,
        height: u32,
        expected: usize,
    },
}
