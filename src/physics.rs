// src/physics.rs
//! Physical constants and the diffusion coefficient for scaled Brownian motion
//!
//! The diffusion coefficient used here is thermal energy over particle radius,
//! `D = k_B * T / r`. Note the bare radius in the denominator: this is the
//! convention of the simulator this crate reproduces, not the Stokes-Einstein
//! relation (which divides by `6πηr`). Either way the variance law
//! `Var(position(t)) = 2 D t` per axis holds once `D` is fixed.

use crate::error::{validation::*, WalkResult};

/// Boltzmann constant, J/K
pub const BOLTZMANN: f64 = 1.38e-23;

/// Reference temperature, K
pub const ROOM_TEMPERATURE: f64 = 300.0;

/// Reference particle radius, m
pub const REFERENCE_PARTICLE_RADIUS: f64 = 1e-6;

/// Diffusion coefficient `D = k_B * T / r`
///
/// # Errors
///
/// Returns `WalkError::InvalidParameters` for non-positive or non-finite
/// temperature or radius.
pub fn diffusion_coefficient(temperature: f64, radius: f64) -> WalkResult<f64> {
    validate_finite("temperature", temperature)?;
    validate_positive("temperature", temperature)?;
    validate_finite("radius", radius)?;
    validate_positive("radius", radius)?;

    Ok(BOLTZMANN * temperature / radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_diffusion_coefficient() {
        let d = diffusion_coefficient(ROOM_TEMPERATURE, REFERENCE_PARTICLE_RADIUS)
            .expect("reference constants are valid");
        // 1.38e-23 * 300 / 1e-6
        assert_relative_eq!(d, 4.14e-15, max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(diffusion_coefficient(0.0, 1e-6).is_err());
        assert!(diffusion_coefficient(-300.0, 1e-6).is_err());
        assert!(diffusion_coefficient(300.0, 0.0).is_err());
        assert!(diffusion_coefficient(f64::NAN, 1e-6).is_err());
    }
}
