//! Deterministic seeded random streams for terrain generation.
//!
//! Every generation stage draws from its own ChaCha8 stream derived from the
//! world seed. A run is therefore reproducible bit-for-bit, and each stage
//! owns an independent stream, so colorization never disturbs the accretion
//! sequence and concurrent regeneration runs cannot share state.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generation stages with independent random streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenStage {
    /// Random-walk accretion of the height field.
    Accretion,
    /// Grass tone selection and channel jitter during colorization.
    Colorize,
    /// The legacy plains-and-pyramid generator.
    Legacy,
}

/// Derive a u64 seed for a generation stage from the world seed.
///
/// Uses SipHash (via std's `DefaultHasher`) to combine the world seed with
/// the stage tag into a well-distributed u64.
pub fn derive_stage_seed(world_seed: u64, stage: GenStage) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    stage.hash(&mut hasher);
    hasher.finish()
}

/// Derive a deterministic RNG for a generation stage.
///
/// The returned RNG produces an identical sequence of random numbers for the
/// same `(world_seed, stage)` pair, regardless of thread or platform.
pub fn stage_rng(world_seed: u64, stage: GenStage) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_stage_seed(world_seed, stage))
}
