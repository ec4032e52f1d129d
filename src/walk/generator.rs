// src/walk/generator.rs
//! Trajectory Generator
//!
//! # Mathematical Framework
//!
//! Each path accumulates independent Gaussian increments:
//! ```text
//! X_{i+1} = X_i + sqrt(2 * Δt * D) * Z_i,   Z_i ~ N(0,1)
//! ```
//! which discretizes a driftless Wiener process with diffusion coefficient `D`.
//! Variance grows linearly in elapsed time, `Var(X(t)) = 2 D t` per axis.
//!
//! # Reproducibility
//!
//! Construction draws no randomness; `generate()` resolves the base seed
//! (configured or from process entropy), then every path draws from its own
//! substream. A fixed seed therefore yields a bit-identical table regardless
//! of how rayon schedules the paths.

use crate::error::{WalkError, WalkResult};
use crate::rng::{self, RngFactory};
use crate::walk::config::WalkConfig;
use crate::walk::trajectory::Trajectory;
use ndarray::{Array1, Array2};
use rayon::prelude::*;

/// Configuration-driven generator for 1D random walks and 3D Brownian motion
///
/// Owns at most one realized [`Trajectory`]; calling [`generate`](Self::generate)
/// again discards the previous one.
pub struct WalkGenerator {
    config: WalkConfig,
    trajectory: Option<Trajectory>,
}

impl WalkGenerator {
    /// Validate and store the configuration; draws no randomness.
    pub fn new(config: WalkConfig) -> WalkResult<Self> {
        config.validate()?;
        Ok(WalkGenerator {
            config,
            trajectory: None,
        })
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Replace the configuration, discarding any held trajectory.
    pub fn reconfigure(&mut self, config: WalkConfig) -> WalkResult<()> {
        config.validate()?;
        self.config = config;
        self.trajectory = None;
        Ok(())
    }

    /// Simulate all paths and store the resulting trajectory.
    ///
    /// Never fails for a configuration that passed validation; the `Result`
    /// return keeps the call signature uniform with the rest of the API.
    pub fn generate(&mut self) -> WalkResult<&Trajectory> {
        let cfg = &self.config;
        let n = cfg.step_count;
        let axes = cfg.dimensions.axis_count();
        let scale = cfg.increment_scale();

        let factory = match cfg.seed {
            Some(seed) => RngFactory::new(seed),
            None => RngFactory::from_entropy(),
        };

        let timestamps = Array1::from_iter((0..n).map(|i| i as f64 * cfg.time_step));

        // One substream per path; draws are step-major, axis-minor within a path.
        let path_columns: Vec<Vec<Vec<f64>>> = (0..cfg.path_count)
            .into_par_iter()
            .map(|p| {
                let mut rng = factory.create_path_rng(p as u64);
                let mut columns: Vec<Vec<f64>> =
                    (0..axes).map(|_| Vec::with_capacity(n)).collect();
                let mut running = vec![0.0f64; axes];
                for _ in 0..n {
                    for (axis, acc) in running.iter_mut().enumerate() {
                        *acc += scale * rng::get_normal_draw(&mut rng);
                        columns[axis].push(*acc);
                    }
                }
                columns
            })
            .collect();

        let mut positions = Array2::zeros((n, cfg.column_count()));
        for (p, columns) in path_columns.iter().enumerate() {
            for (axis, column) in columns.iter().enumerate() {
                for (i, value) in column.iter().enumerate() {
                    positions[[i, p * axes + axis]] = *value;
                }
            }
        }

        let trajectory = Trajectory::new(
            timestamps,
            positions,
            cfg.path_count,
            cfg.dimensions,
            cfg.time_step,
            cfg.diffusion_coefficient,
        );
        Ok(self.trajectory.insert(trajectory))
    }

    /// Borrow the last generated trajectory.
    ///
    /// # Errors
    ///
    /// `TrajectoryNotGenerated` before the first `generate()` call.
    pub fn trajectory(&self) -> WalkResult<&Trajectory> {
        self.trajectory
            .as_ref()
            .ok_or_else(|| WalkError::TrajectoryNotGenerated {
                operation: "read the trajectory".to_string(),
            })
    }

    pub fn has_trajectory(&self) -> bool {
        self.trajectory.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::config::Dimensions;

    #[test]
    fn test_construction_rejects_invalid_config() {
        let cfg = WalkConfig {
            time_step: -1.0,
            ..Default::default()
        };
        assert!(WalkGenerator::new(cfg).is_err());
    }

    #[test]
    fn test_trajectory_before_generate_is_state_error() {
        let gen = WalkGenerator::new(WalkConfig::default()).expect("valid config");
        match gen.trajectory() {
            Err(WalkError::TrajectoryNotGenerated { .. }) => {}
            other => panic!("expected TrajectoryNotGenerated, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_generate_replaces_previous_trajectory() {
        let cfg = WalkConfig {
            step_count: 10,
            path_count: 2,
            seed: Some(1),
            ..Default::default()
        };
        let mut gen = WalkGenerator::new(cfg).expect("valid config");
        let first = gen.generate().expect("generation is infallible").clone();
        let second = gen.generate().expect("generation is infallible");
        // Same seed, so the regenerated table is identical; the point is that
        // only one trajectory is held at a time.
        assert_eq!(first.positions(), second.positions());
        assert!(gen.has_trajectory());
    }

    #[test]
    fn test_reconfigure_discards_trajectory() {
        let mut gen = WalkGenerator::new(WalkConfig {
            step_count: 5,
            ..Default::default()
        })
        .expect("valid config");
        gen.generate().expect("generation is infallible");
        assert!(gen.has_trajectory());

        gen.reconfigure(WalkConfig {
            step_count: 7,
            dimensions: Dimensions::Three,
            ..Default::default()
        })
        .expect("valid config");
        assert!(!gen.has_trajectory());
    }
}
