//! # brownian-sim: Random Walks and Brownian Motion in Rust
//!
//! A Rust library for simulating one-dimensional random walks and
//! three-dimensional Brownian motion, with static and animated Plotly
//! visualization of the resulting trajectories.
//!
//! ## Key Features
//!
//! - **One configuration-driven generator**: 1D multi-path walks and 3D
//!   particle trajectories differ only by `dimensions` and
//!   `diffusion_coefficient`
//! - **Reproducible**: per-instance seeded RNG with one substream per path,
//!   bit-identical results for a fixed seed regardless of thread count
//! - **Parallel**: paths are simulated concurrently with Rayon
//! - **Physically scaled**: diffusion coefficient from `k_B * T / r` for
//!   micron-scale particles at room temperature
//! - **Interactive output**: static figures, frame-by-frame animations with
//!   playback controls, single-file HTML export
//!
//! ## Quick Start
//!
//! ```rust
//! use brownian_sim::render::{Renderer, StaticPlotRenderer};
//! use brownian_sim::walk::{WalkConfig, WalkGenerator};
//!
//! // Five 1D random walks, 50 steps of 0.5 time units each
//! let config = WalkConfig {
//!     time_step: 0.5,
//!     step_count: 50,
//!     path_count: 5,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut generator = WalkGenerator::new(config).expect("valid configuration");
//! let trajectory = generator.generate().expect("generation is infallible");
//!
//! let figure = StaticPlotRenderer::new()
//!     .render(trajectory)
//!     .expect("renderable trajectory");
//! // figure.write_html("walks.html");
//! ```
//!
//! ## Mathematical Foundation
//!
//! Each path is a cumulative sum of Gaussian increments scaled by
//! `sqrt(2 * Δt * D)`, the Euler discretization of a driftless Wiener process
//! with diffusion coefficient `D`. Displacement variance grows linearly in
//! elapsed time: `Var(X(t)) = 2 D t` per axis. The default `D = 0.5` recovers
//! the textbook random-walk scaling `sqrt(Δt)`.

// Module declarations
pub mod error;
pub mod physics;
pub mod render;
pub mod rng;
pub mod stats;
pub mod walk;

// Re-export commonly used types for convenience
pub use error::{WalkError, WalkResult};
pub use render::{AnimationHandle, AnimationRenderer, Renderer, StaticPlotRenderer};
pub use walk::{Dimensions, Trajectory, WalkConfig, WalkGenerator};
