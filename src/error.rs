// src/error.rs
use std::fmt;

/// Custom error types for the brownian-sim library
#[derive(Debug, Clone)]
pub enum WalkError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// A trajectory was requested before `generate()` produced one
    TrajectoryNotGenerated { operation: String },

    /// Failure while writing a rendered figure to disk
    RenderError { target: String, reason: String },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            WalkError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            WalkError::TrajectoryNotGenerated { operation } => {
                write!(
                    f,
                    "Cannot {} before a trajectory exists: call generate() first",
                    operation
                )
            }
            WalkError::RenderError { target, reason } => {
                write!(f, "Failed to render to '{}': {}", target, reason)
            }
        }
    }
}

impl std::error::Error for WalkError {}

/// Result type alias for brownian-sim operations
pub type WalkResult<T> = Result<T, WalkError>;

/// Validation utilities
pub mod validation {
    use super::{WalkError, WalkResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> WalkResult<()> {
        if value <= 0.0 {
            Err(WalkError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> WalkResult<()> {
        if !value.is_finite() {
            Err(WalkError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> WalkResult<()> {
        if paths == 0 {
            Err(WalkError::InvalidConfiguration {
                field: "path_count".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if paths > 10_000_000 {
            Err(WalkError::InvalidConfiguration {
                field: "path_count".to_string(),
                reason: "exceeds maximum allowed (10 million)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> WalkResult<()> {
        if steps == 0 {
            Err(WalkError::InvalidConfiguration {
                field: "step_count".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > 10_000_000 {
            Err(WalkError::InvalidConfiguration {
                field: "step_count".to_string(),
                reason: "exceeds maximum allowed (10 million)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
