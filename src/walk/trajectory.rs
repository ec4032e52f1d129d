// src/walk/trajectory.rs
//! Realized trajectory table
//!
//! One generation call produces one `Trajectory`: a time axis plus a
//! `(step_count, path_count * axis_count)` position table. Columns are grouped
//! per path, so path `p` occupies columns `[p * axis_count, (p+1) * axis_count)`.
//! The table is read-only after creation; renderers and statistics helpers
//! borrow it without copying.

use crate::error::{WalkError, WalkResult};
use crate::walk::config::Dimensions;
use ndarray::{Array1, Array2, ArrayView1};

#[derive(Debug, Clone)]
pub struct Trajectory {
    timestamps: Array1<f64>,
    positions: Array2<f64>,
    path_count: usize,
    dimensions: Dimensions,
    time_step: f64,
    diffusion_coefficient: f64,
}

impl Trajectory {
    pub(crate) fn new(
        timestamps: Array1<f64>,
        positions: Array2<f64>,
        path_count: usize,
        dimensions: Dimensions,
        time_step: f64,
        diffusion_coefficient: f64,
    ) -> Self {
        debug_assert_eq!(timestamps.len(), positions.nrows());
        debug_assert_eq!(positions.ncols(), path_count * dimensions.axis_count());
        Trajectory {
            timestamps,
            positions,
            path_count,
            dimensions,
            time_step,
            diffusion_coefficient,
        }
    }

    /// Time axis, `timestamps[i] = i * time_step`
    pub fn timestamps(&self) -> &Array1<f64> {
        &self.timestamps
    }

    /// Full position table, shape `(step_count, path_count * axis_count)`
    pub fn positions(&self) -> &Array2<f64> {
        &self.positions
    }

    pub fn step_count(&self) -> usize {
        self.timestamps.len()
    }

    pub fn path_count(&self) -> usize {
        self.path_count
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn diffusion_coefficient(&self) -> f64 {
        self.diffusion_coefficient
    }

    /// `(rows, columns)` of the position table
    pub fn shape(&self) -> (usize, usize) {
        (self.positions.nrows(), self.positions.ncols())
    }

    /// One coordinate axis of one path
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when `path` or `axis` is out of range.
    pub fn axis_series(&self, path: usize, axis: usize) -> WalkResult<ArrayView1<'_, f64>> {
        let axes = self.dimensions.axis_count();
        if path >= self.path_count {
            return Err(WalkError::InvalidConfiguration {
                field: "path".to_string(),
                reason: format!("index {} out of range ({} paths)", path, self.path_count),
            });
        }
        if axis >= axes {
            return Err(WalkError::InvalidConfiguration {
                field: "axis".to_string(),
                reason: format!("index {} out of range ({} axes)", axis, axes),
            });
        }
        Ok(self.positions.column(path * axes + axis))
    }

    /// Owned copy of the time axis, for chart libraries that take `Vec`
    pub fn timestamps_vec(&self) -> Vec<f64> {
        self.timestamps.to_vec()
    }

    /// Owned copy of one axis of one path
    pub fn axis_series_vec(&self, path: usize, axis: usize) -> WalkResult<Vec<f64>> {
        Ok(self.axis_series(path, axis)?.to_vec())
    }
}
