// src/render/static_plot.rs
//! Static Plotly figures
//!
//! 1D trajectories become one line per path over the time axis; 3D
//! trajectories become one polyline per path in a 3D scene. The figure is a
//! plain [`plotly::Plot`], so callers can keep it in memory, embed it, or
//! write it out with `Plot::write_html`.

use crate::error::WalkResult;
use crate::render::{path_color, FigureOptions, Renderer};
use crate::walk::config::Dimensions;
use crate::walk::trajectory::Trajectory;
use plotly::common::{Line, Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter, Scatter3D};

/// Renders a trajectory into a static Plotly figure
pub struct StaticPlotRenderer {
    title: Option<String>,
    options: FigureOptions,
}

impl StaticPlotRenderer {
    pub fn new() -> Self {
        StaticPlotRenderer {
            title: None,
            options: FigureOptions::default(),
        }
    }

    /// Override the default title (which reflects the path count)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: FigureOptions) -> Self {
        self.options = options;
        self
    }

    fn title_for(&self, trajectory: &Trajectory) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        match trajectory.dimensions() {
            Dimensions::One => format!("{} random walks", trajectory.path_count()),
            Dimensions::Three => {
                if trajectory.path_count() == 1 {
                    "3D Brownian motion".to_string()
                } else {
                    format!("3D Brownian motion ({} paths)", trajectory.path_count())
                }
            }
        }
    }

    fn render_1d(&self, trajectory: &Trajectory) -> WalkResult<Plot> {
        let mut plot = Plot::new();
        let title = self.title_for(trajectory);
        let timestamps = trajectory.timestamps_vec();

        for path in 0..trajectory.path_count() {
            let series = trajectory.axis_series_vec(path, 0)?;
            let trace = Scatter::new(timestamps.clone(), series)
                .mode(Mode::Lines)
                .name(&format!("path {}", path))
                .line(Line::new().color(path_color(path)).width(1.5));
            plot.add_trace(trace);
        }

        let layout = Layout::new()
            .title(Title::from(title.as_str()))
            .x_axis(
                Axis::new()
                    .title(Title::from("time"))
                    .show_grid(self.options.contains(FigureOptions::GRID)),
            )
            .y_axis(
                Axis::new()
                    .title(Title::from("displacement"))
                    .show_grid(self.options.contains(FigureOptions::GRID)),
            )
            .show_legend(self.options.contains(FigureOptions::LEGEND))
            .width(1100)
            .height(600);
        plot.set_layout(layout);
        Ok(plot)
    }

    fn render_3d(&self, trajectory: &Trajectory) -> WalkResult<Plot> {
        let mut plot = Plot::new();
        let title = self.title_for(trajectory);

        for path in 0..trajectory.path_count() {
            let x = trajectory.axis_series_vec(path, 0)?;
            let y = trajectory.axis_series_vec(path, 1)?;
            let z = trajectory.axis_series_vec(path, 2)?;
            let trace = Scatter3D::new(x, y, z)
                .mode(Mode::Lines)
                .name(&format!("path {}", path))
                .line(Line::new().color(path_color(path)).width(6.0));
            plot.add_trace(trace);
        }

        let layout = Layout::new()
            .title(Title::from(title.as_str()))
            .show_legend(self.options.contains(FigureOptions::LEGEND))
            .width(900)
            .height(700);
        plot.set_layout(layout);
        Ok(plot)
    }
}

impl Default for StaticPlotRenderer {
    fn default() -> Self {
        StaticPlotRenderer::new()
    }
}

impl Renderer for StaticPlotRenderer {
    type Figure = Plot;

    fn render(&self, trajectory: &Trajectory) -> WalkResult<Plot> {
        match trajectory.dimensions() {
            Dimensions::One => self.render_1d(trajectory),
            Dimensions::Three => self.render_3d(trajectory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::{WalkConfig, WalkGenerator};

    #[test]
    fn test_1d_figure_has_one_trace_per_path() {
        let mut gen = WalkGenerator::new(WalkConfig {
            step_count: 20,
            path_count: 5,
            seed: Some(42),
            ..Default::default()
        })
        .expect("valid config");
        let traj = gen.generate().expect("generation is infallible");

        let plot = StaticPlotRenderer::new().render(traj).expect("renderable");
        let html = plot.to_html();
        for path in 0..5 {
            assert!(html.contains(&format!("path {}", path)));
        }
        assert!(html.contains("5 random walks"));
    }

    #[test]
    fn test_3d_figure_renders_polyline() {
        let mut gen = WalkGenerator::new(
            WalkConfig::physical(1e-6, 50, Some(7)).expect("valid inputs"),
        )
        .expect("valid config");
        let traj = gen.generate().expect("generation is infallible");

        let plot = StaticPlotRenderer::new().render(traj).expect("renderable");
        let html = plot.to_html();
        assert!(html.contains("scatter3d"));
        assert!(html.contains("3D Brownian motion"));
    }
}
