// src/rng.rs
//! Random Number Generation for Trajectory Simulation
//!
//! # Design Philosophy
//!
//! Random walk simulation needs random numbers with specific properties:
//! 1. **Reproducibility**: Same seed → same trajectory (critical for debugging/validation)
//! 2. **Parallel safety**: Different paths must have independent streams
//! 3. **Per-instance ownership**: No process-global seed that one generator
//!    could clobber for another
//!
//! # Substream Scheme
//!
//! A `RngFactory` holds one base seed. Path `p` draws from an [`StdRng`] seeded
//! with `base_seed + p`, so the realized trajectory is identical no matter how
//! rayon schedules the paths across threads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// RNG factory handing out one independent substream per path
#[derive(Debug, Clone)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Factory with a base seed drawn from process entropy
    pub fn from_entropy() -> Self {
        Self {
            base_seed: rand::random::<u64>(),
        }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Create the RNG substream for a specific path
    pub fn create_path_rng(&self, path_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(path_id))
    }
}

/// Draw a single standard-normal sample
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
