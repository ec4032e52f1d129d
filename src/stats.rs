// src/stats.rs
//! Sample statistics over a realized trajectory
//!
//! The defining check for a Wiener process: displacement variance grows
//! linearly in elapsed time, `Var(X(t)) = 2 D t` per axis. These helpers
//! measure that from a generated ensemble so tests (and callers) can compare
//! against the configured diffusion coefficient.

use crate::error::{WalkError, WalkResult};
use crate::walk::trajectory::Trajectory;
use statrs::statistics::Statistics;

/// Sample variance of displacement across the ensemble at one step index
///
/// Pools every position column (all paths, all axes) at row `step`; each
/// column is an independent realization of the same per-axis marginal, so for
/// large ensembles this approximates `2 * D * timestamps[step]`.
///
/// # Errors
///
/// `InvalidConfiguration` when `step` is out of range or the ensemble has
/// fewer than two columns (sample variance is undefined).
pub fn ensemble_variance(trajectory: &Trajectory, step: usize) -> WalkResult<f64> {
    ensure_step_in_range(trajectory, step)?;
    let row = trajectory.positions().row(step);
    if row.len() < 2 {
        return Err(WalkError::InvalidConfiguration {
            field: "path_count".to_string(),
            reason: "ensemble variance needs at least two position columns".to_string(),
        });
    }
    Ok(row.iter().variance())
}

/// Mean squared displacement magnitude across paths at one step index
///
/// Averages `|X_p(t)|^2` over paths; approximates `2 * D * axis_count * t`.
pub fn mean_squared_displacement(trajectory: &Trajectory, step: usize) -> WalkResult<f64> {
    ensure_step_in_range(trajectory, step)?;
    let axes = trajectory.dimensions().axis_count();
    let squared: Vec<f64> = (0..trajectory.path_count())
        .map(|p| {
            (0..axes)
                .map(|axis| {
                    let x = trajectory.positions()[[step, p * axes + axis]];
                    x * x
                })
                .sum()
        })
        .collect();
    Ok(squared.iter().mean())
}

fn ensure_step_in_range(trajectory: &Trajectory, step: usize) -> WalkResult<()> {
    if step >= trajectory.step_count() {
        return Err(WalkError::InvalidConfiguration {
            field: "step".to_string(),
            reason: format!(
                "index {} out of range ({} steps)",
                step,
                trajectory.step_count()
            ),
        });
    }
    Ok(())
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::{WalkConfig, WalkGenerator};
    use approx::assert_relative_eq;

    #[test]
    fn test_step_out_of_range() {
        let mut gen = WalkGenerator::new(WalkConfig {
            step_count: 10,
            path_count: 4,
            seed: Some(3),
            ..Default::default()
        })
        .expect("valid config");
        let traj = gen.generate().expect("generation is infallible");
        assert!(ensemble_variance(traj, 10).is_err());
        assert!(mean_squared_displacement(traj, 10).is_err());
        assert!(ensemble_variance(traj, 9).is_ok());
    }

    #[test]
    fn test_single_column_variance_rejected() {
        let mut gen = WalkGenerator::new(WalkConfig {
            step_count: 10,
            path_count: 1,
            seed: Some(3),
            ..Default::default()
        })
        .expect("valid config");
        let traj = gen.generate().expect("generation is infallible");
        assert!(ensemble_variance(traj, 5).is_err());
    }

    #[test]
    fn test_msd_of_known_table() {
        // Hand-checkable: MSD is the mean over paths of sum-of-squares.
        use crate::walk::config::Dimensions;
        use ndarray::{arr2, Array1};

        let traj = crate::walk::trajectory::Trajectory::new(
            Array1::from(vec![0.0, 1.0]),
            arr2(&[[0.0, 0.0], [3.0, 4.0]]),
            2,
            Dimensions::One,
            1.0,
            0.5,
        );
        let msd = mean_squared_displacement(&traj, 1).expect("in range");
        assert_relative_eq!(msd, (9.0 + 16.0) / 2.0);
    }
}
