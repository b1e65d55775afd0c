// File: crates/rasterplot-core/src/axis.rs
// Summary: Axis placement (origin vs. plot border), gridlines, tick marks and tick labels.

use skia_safe as skia;

use crate::bounds::Bounds;
use crate::geometry::is_inside_axis;
use crate::paint::{pt, stroke};
use crate::scale::Scales;
use crate::text::LabelPainter;
use crate::theme::Theme;
use crate::ticks;

const AXIS_WIDTH: f32 = 2.0;
const TICK_HALF: f64 = 5.0;
const X_LABEL_GAP: f64 = 14.0;
const Y_LABEL_GAP: f64 = 12.0;

/// Where the axes ended up for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    /// Pixel position of data x = 0.
    pub origin_x: f64,
    /// Pixel position of data y = 0.
    pub origin_y: f64,
    /// The horizontal axis (y = 0) lies within the plot rectangle.
    pub x_axis_inside: bool,
    /// The vertical axis (x = 0) lies within the plot rectangle.
    pub y_axis_inside: bool,
    /// Pixel row carrying the x tick marks.
    pub x_baseline: f64,
    /// Pixel column carrying the y tick marks.
    pub y_baseline: f64,
}

impl AxisLayout {
    pub fn compute(scales: &Scales) -> Self {
        let plot = &scales.plot;
        let origin_x = scales.x.to_px(0.0);
        let origin_y = scales.y.to_px(0.0);
        let x_axis_inside = is_inside_axis(origin_y, plot.top, plot.bottom());
        let y_axis_inside = is_inside_axis(origin_x, plot.left, plot.right());
        Self {
            origin_x,
            origin_y,
            x_axis_inside,
            y_axis_inside,
            x_baseline: if x_axis_inside { origin_y } else { plot.bottom() },
            y_baseline: if y_axis_inside { origin_x } else { plot.left },
        }
    }
}

/// Tick values of one axis with their pixel positions and the subset that
/// gets marks and labels.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTicks {
    pub values: Vec<f64>,
    pub positions: Vec<f64>,
    pub labeled: Vec<usize>,
}

impl AxisTicks {
    pub fn new(min: f64, max: f64, to_px: impl Fn(f64) -> f64) -> Self {
        let values = ticks::generate(min, max);
        let positions: Vec<f64> = values.iter().map(|&v| to_px(v)).collect();
        let labeled = ticks::thin(&positions);
        Self { values, positions, labeled }
    }

    pub fn labeled_ticks(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.labeled.iter().map(|&i| (self.values[i], self.positions[i]))
    }
}

/// Draw gridlines (when `gridlines`), visible axis lines, tick marks and
/// labels. Labels are skipped when no painter is supplied.
pub fn draw_axes(
    canvas: &skia::Canvas,
    bounds: &Bounds,
    scales: &Scales,
    theme: &Theme,
    labels: Option<&LabelPainter>,
    gridlines: bool,
) -> AxisLayout {
    let plot = &scales.plot;
    let layout = AxisLayout::compute(scales);
    let x_ticks = AxisTicks::new(bounds.min_x, bounds.max_x, |v| scales.x.to_px(v));
    let y_ticks = AxisTicks::new(bounds.min_y, bounds.max_y, |v| scales.y.to_px(v));

    if gridlines {
        let grid = stroke(theme.grid, 1.0);
        for &px in &x_ticks.positions {
            canvas.draw_line(pt(px, plot.top), pt(px, plot.bottom()), &grid);
        }
        for &py in &y_ticks.positions {
            canvas.draw_line(pt(plot.left, py), pt(plot.right(), py), &grid);
        }
    }

    let axis = stroke(theme.axis_line, AXIS_WIDTH);
    if layout.x_axis_inside {
        canvas.draw_line(pt(plot.left, layout.origin_y), pt(plot.right(), layout.origin_y), &axis);
    }
    if layout.y_axis_inside {
        canvas.draw_line(pt(layout.origin_x, plot.top), pt(layout.origin_x, plot.bottom()), &axis);
    }

    let tick = stroke(theme.label, 1.0);
    let base_y = layout.x_baseline;
    for (v, px) in x_ticks.labeled_ticks() {
        canvas.draw_line(pt(px, base_y - TICK_HALF), pt(px, base_y + TICK_HALF), &tick);
        if let Some(painter) = labels {
            painter.draw_anchored(canvas, &ticks::format_axis(v), px, base_y + X_LABEL_GAP, 0.5, 0.5);
        }
    }
    let base_x = layout.y_baseline;
    for (v, py) in y_ticks.labeled_ticks() {
        canvas.draw_line(pt(base_x - TICK_HALF, py), pt(base_x + TICK_HALF, py), &tick);
        if let Some(painter) = labels {
            painter.draw_anchored(canvas, &ticks::format_axis(v), base_x - Y_LABEL_GAP, py, 1.0, 0.5);
        }
    }

    tracing::trace!(
        x_ticks = x_ticks.values.len(),
        x_labels = x_ticks.labeled.len(),
        y_ticks = y_ticks.values.len(),
        y_labels = y_ticks.labeled.len(),
        "axes drawn"
    );
    layout
}
