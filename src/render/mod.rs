// src/render/mod.rs
//! Rendering of generated trajectories
//!
//! Rendering is a capability over the trajectory table, not a method on the
//! generator: anything that can borrow a [`Trajectory`](crate::walk::Trajectory)
//! can be drawn, and chart backends can be swapped behind the [`Renderer`]
//! trait without touching the generation code.

use crate::error::WalkResult;
use crate::walk::trajectory::Trajectory;
use bitflags::bitflags;

pub mod animation;
pub mod static_plot;

pub use animation::{AnimationHandle, AnimationRenderer};
pub use static_plot::StaticPlotRenderer;

bitflags! {
    /// Decorations applied to rendered figures
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FigureOptions: u32 {
        const NONE   = 0;
        const GRID   = 1 << 0;
        const LEGEND = 1 << 1;
    }
}

impl Default for FigureOptions {
    fn default() -> Self {
        FigureOptions::GRID | FigureOptions::LEGEND
    }
}

/// A chart backend consuming a read-only trajectory
pub trait Renderer {
    type Figure;

    fn render(&self, trajectory: &Trajectory) -> WalkResult<Self::Figure>;
}

/// Default Plotly color cycle, reused so a path's line and its animation
/// marker stay the same color.
pub(crate) const PATH_COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

pub(crate) fn path_color(path: usize) -> &'static str {
    PATH_COLORS[path % PATH_COLORS.len()]
}
