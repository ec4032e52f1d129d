// src/render/animation.rs
//! Animated trajectory playback
//!
//! Builds a Plotly figure spec with one frame per step index `i` in
//! `[1, step_count)`: frame `i` shows every path's polyline truncated to its
//! first `i` points plus a marker at point `i-1`. The figure carries play/pause
//! buttons and a scrubber slider whose steps are labeled at roughly ten evenly
//! spaced ticks. Axis ranges are fixed up front so playback does not rescale.
//!
//! The figure is assembled directly as JSON (frames, sliders, and update menus
//! are plain Plotly schema objects) and can be serialized into a single-file
//! HTML document.

use crate::error::{WalkError, WalkResult};
use crate::render::{path_color, FigureOptions, Renderer};
use crate::walk::config::Dimensions;
use crate::walk::trajectory::Trajectory;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

const SLIDER_TICK_TARGET: usize = 10;

/// Renders a trajectory into an [`AnimationHandle`]
pub struct AnimationRenderer {
    frame_interval_ms: u64,
    output_target: Option<PathBuf>,
    options: FigureOptions,
}

impl AnimationRenderer {
    pub fn new(frame_interval_ms: u64) -> Self {
        AnimationRenderer {
            frame_interval_ms,
            output_target: None,
            options: FigureOptions::default(),
        }
    }

    /// Also serialize the rendered animation to a single-file HTML document
    pub fn with_output_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.output_target = Some(target.into());
        self
    }

    pub fn with_options(mut self, options: FigureOptions) -> Self {
        self.options = options;
        self
    }

    fn layout(&self, trajectory: &Trajectory, columns: &[Vec<Vec<f64>>]) -> Value {
        let grid = self.options.contains(FigureOptions::GRID);
        let legend = self.options.contains(FigureOptions::LEGEND);
        let timestamps = trajectory.timestamps();
        let t_max = timestamps[timestamps.len() - 1];

        let mut layout = match trajectory.dimensions() {
            Dimensions::One => {
                let (y_min, y_max) = padded_extent(columns.iter().flatten().flatten());
                json!({
                    "title": {"text": format!("{} random walks", trajectory.path_count())},
                    "xaxis": {"title": {"text": "time"}, "range": [0.0, t_max], "showgrid": grid},
                    "yaxis": {"title": {"text": "displacement"}, "range": [y_min, y_max], "showgrid": grid},
                    "width": 1100,
                    "height": 600,
                })
            }
            Dimensions::Three => {
                let extent = |axis: usize| {
                    padded_extent(columns.iter().map(|path| path[axis].iter()).flatten())
                };
                let (x_min, x_max) = extent(0);
                let (y_min, y_max) = extent(1);
                let (z_min, z_max) = extent(2);
                json!({
                    "title": {"text": "3D Brownian motion"},
                    "scene": {
                        "xaxis": {"range": [x_min, x_max], "showgrid": grid},
                        "yaxis": {"range": [y_min, y_max], "showgrid": grid},
                        "zaxis": {"range": [z_min, z_max], "showgrid": grid},
                    },
                    "width": 900,
                    "height": 700,
                })
            }
        };

        layout["showlegend"] = json!(legend);
        layout["updatemenus"] = json!([{
            "type": "buttons",
            "showactive": false,
            "x": 0.05,
            "y": 1.12,
            "buttons": [
                {
                    "label": "Play",
                    "method": "animate",
                    "args": [Value::Null, {
                        "frame": {"duration": self.frame_interval_ms, "redraw": true},
                        "fromcurrent": true,
                        "transition": {"duration": 0},
                    }],
                },
                {
                    "label": "Pause",
                    "method": "animate",
                    "args": [[Value::Null], {
                        "mode": "immediate",
                        "frame": {"duration": 0, "redraw": true},
                    }],
                },
            ],
        }]);
        layout["sliders"] = json!([self.slider(trajectory)]);
        layout
    }

    fn slider(&self, trajectory: &Trajectory) -> Value {
        let n = trajectory.step_count();
        let frame_count = n.saturating_sub(1);
        let label_stride = (frame_count / SLIDER_TICK_TARGET).max(1);
        let timestamps = trajectory.timestamps();

        let steps: Vec<Value> = (1..n)
            .map(|i| {
                // Frame i stops at point i-1, so that is the time it shows.
                let label = if (i - 1) % label_stride == 0 {
                    format_time(timestamps[i - 1])
                } else {
                    String::new()
                };
                json!({
                    "label": label,
                    "method": "animate",
                    "args": [[i.to_string()], {
                        "mode": "immediate",
                        "frame": {"duration": 0, "redraw": true},
                        "transition": {"duration": 0},
                    }],
                })
            })
            .collect();

        json!({
            "active": 0,
            "currentvalue": {"prefix": "t = "},
            "pad": {"t": 30},
            "steps": steps,
        })
    }
}

impl Renderer for AnimationRenderer {
    type Figure = AnimationHandle;

    fn render(&self, trajectory: &Trajectory) -> WalkResult<AnimationHandle> {
        let n = trajectory.step_count();
        let columns = gather_columns(trajectory)?;
        let timestamps = trajectory.timestamps_vec();

        let frames: Vec<Value> = (1..n)
            .map(|i| {
                json!({
                    "name": i.to_string(),
                    "data": frame_traces(trajectory, &timestamps, &columns, i),
                })
            })
            .collect();

        let figure = json!({
            "data": frame_traces(trajectory, &timestamps, &columns, 1),
            "layout": self.layout(trajectory, &columns),
            "frames": frames,
        });

        let handle = AnimationHandle {
            figure,
            frame_count: n.saturating_sub(1),
            frame_interval_ms: self.frame_interval_ms,
        };

        if let Some(target) = &self.output_target {
            handle.write_html(target)?;
        }
        Ok(handle)
    }
}

/// An assembled animation: figure spec + playback parameters
pub struct AnimationHandle {
    figure: Value,
    frame_count: usize,
    frame_interval_ms: u64,
}

impl AnimationHandle {
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    /// The full Plotly figure spec (`data`, `layout`, `frames`)
    pub fn figure(&self) -> &Value {
        &self.figure
    }

    pub fn to_json(&self) -> String {
        self.figure.to_string()
    }

    /// Single-file HTML document with playback controls
    pub fn to_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    <title>brownian-sim animation</title>
    <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
</head>
<body>
    <div id="brownian-animation"></div>
    <script>
        const figure = {};
        Plotly.newPlot("brownian-animation", figure.data, figure.layout)
            .then(function () {{
                Plotly.addFrames("brownian-animation", figure.frames);
            }});
    </script>
</body>
</html>
"#,
            self.to_json()
        )
    }

    /// Write the HTML document to `target`
    pub fn write_html(&self, target: impl AsRef<Path>) -> WalkResult<()> {
        let target = target.as_ref();
        fs::write(target, self.to_html()).map_err(|e| WalkError::RenderError {
            target: target.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Per-path, per-axis owned columns, gathered once so each frame can slice
fn gather_columns(trajectory: &Trajectory) -> WalkResult<Vec<Vec<Vec<f64>>>> {
    let axes = trajectory.dimensions().axis_count();
    (0..trajectory.path_count())
        .map(|path| {
            (0..axes)
                .map(|axis| trajectory.axis_series_vec(path, axis))
                .collect()
        })
        .collect()
}

fn frame_traces(
    trajectory: &Trajectory,
    timestamps: &[f64],
    columns: &[Vec<Vec<f64>>],
    truncate_at: usize,
) -> Vec<Value> {
    let mut traces = Vec::with_capacity(columns.len() * 2);
    let marker_at = truncate_at - 1;

    for (path, axes) in columns.iter().enumerate() {
        let color = path_color(path);
        let group = format!("path-{}", path);
        match trajectory.dimensions() {
            Dimensions::One => {
                let series = &axes[0];
                traces.push(json!({
                    "type": "scatter",
                    "mode": "lines",
                    "name": format!("path {}", path),
                    "legendgroup": group,
                    "x": &timestamps[..truncate_at],
                    "y": &series[..truncate_at],
                    "line": {"color": color, "width": 1.5},
                }));
                traces.push(json!({
                    "type": "scatter",
                    "mode": "markers",
                    "showlegend": false,
                    "legendgroup": group,
                    "x": [timestamps[marker_at]],
                    "y": [series[marker_at]],
                    "marker": {"color": color, "size": 8},
                }));
            }
            Dimensions::Three => {
                traces.push(json!({
                    "type": "scatter3d",
                    "mode": "lines",
                    "name": format!("path {}", path),
                    "legendgroup": group,
                    "x": &axes[0][..truncate_at],
                    "y": &axes[1][..truncate_at],
                    "z": &axes[2][..truncate_at],
                    "line": {"color": color, "width": 4},
                }));
                traces.push(json!({
                    "type": "scatter3d",
                    "mode": "markers",
                    "showlegend": false,
                    "legendgroup": group,
                    "x": [axes[0][marker_at]],
                    "y": [axes[1][marker_at]],
                    "z": [axes[2][marker_at]],
                    "marker": {"color": color, "size": 4},
                }));
            }
        }
    }
    traces
}

/// Fixed display range with a small margin so playback never rescales
fn padded_extent<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        (min - 1.0, max + 1.0)
    } else {
        (min - 0.05 * span, max + 0.05 * span)
    }
}

fn format_time(t: f64) -> String {
    if t == 0.0 {
        "0".to_string()
    } else if t.abs() < 0.01 || t.abs() >= 10_000.0 {
        format!("{:.2e}", t)
    } else {
        format!("{:.2}", t)
    }
}
