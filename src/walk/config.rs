// src/walk/config.rs
use crate::error::{validation::*, WalkResult};
use crate::physics;
use serde::Serialize;

/// Spatial dimensionality of a walk
///
/// The simulator supports scalar walks and 3D particle trajectories; nothing
/// in between has a rendering counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimensions {
    One,
    Three,
}

impl Dimensions {
    /// Number of position columns each path contributes
    pub fn axis_count(&self) -> usize {
        match self {
            Dimensions::One => 1,
            Dimensions::Three => 3,
        }
    }
}

/// Configuration for one trajectory generation run
///
/// # Scaling Convention
///
/// Increments are scaled by `sqrt(2 * time_step * diffusion_coefficient)`.
/// The default `diffusion_coefficient = 0.5` collapses this to the plain
/// random-walk convention `sqrt(time_step)`; the physically-scaled variant
/// sets `D = k_B * T / r` instead (see [`WalkConfig::physical`]).
#[derive(Debug, Clone, Serialize)]
pub struct WalkConfig {
    /// Size of one simulation tick
    pub time_step: f64,
    /// Number of ticks to simulate
    pub step_count: usize,
    /// Number of independent parallel paths
    pub path_count: usize,
    /// Spatial dimensionality (1 or 3)
    pub dimensions: Dimensions,
    /// Optional seed; `None` draws a base seed from process entropy
    pub seed: Option<u64>,
    /// Diffusion coefficient `D` in `Var(x(t)) = 2 D t`
    pub diffusion_coefficient: f64,
}

impl WalkConfig {
    /// The 3D single-particle configuration of the physical Brownian-motion
    /// variant: room temperature, 1 µm particle radius.
    pub fn physical(time_step: f64, step_count: usize, seed: Option<u64>) -> WalkResult<Self> {
        let d = physics::diffusion_coefficient(
            physics::ROOM_TEMPERATURE,
            physics::REFERENCE_PARTICLE_RADIUS,
        )?;
        Ok(WalkConfig {
            time_step,
            step_count,
            path_count: 1,
            dimensions: Dimensions::Three,
            seed,
            diffusion_coefficient: d,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> WalkResult<()> {
        validate_finite("time_step", self.time_step)?;
        validate_positive("time_step", self.time_step)?;
        validate_steps(self.step_count)?;
        validate_paths(self.path_count)?;
        validate_finite("diffusion_coefficient", self.diffusion_coefficient)?;
        validate_positive("diffusion_coefficient", self.diffusion_coefficient)?;
        Ok(())
    }

    /// Total number of position columns: `path_count * axis_count`
    pub fn column_count(&self) -> usize {
        self.path_count * self.dimensions.axis_count()
    }

    /// Per-increment scale factor `sqrt(2 * dt * D)`
    pub fn increment_scale(&self) -> f64 {
        (2.0 * self.time_step * self.diffusion_coefficient).sqrt()
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            time_step: 1.0,
            step_count: 1000,
            path_count: 1,
            dimensions: Dimensions::One,
            seed: None,
            diffusion_coefficient: 0.5,
        }
    }
}
