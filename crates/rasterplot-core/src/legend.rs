// File: crates/rasterplot-core/src/legend.rs
// Summary: Vertical color bar with value ticks, placed right of a heatmap.

use skia_safe as skia;

use crate::color::{ramp, Rgb};
use crate::geometry::PlotRect;
use crate::paint::{fill, pt, stroke};
use crate::text::LabelPainter;
use crate::theme::Theme;
use crate::ticks;

/// Gap between the plot's right edge and the bar.
pub const GAP: f64 = 20.0;
/// Bar width.
pub const BAR_WIDTH: f64 = 20.0;
const TICK_LEN: f64 = 6.0;
const LABEL_GAP: f64 = 10.0;

/// Bar rectangle for a plot.
pub fn bar_rect(plot: &PlotRect) -> PlotRect {
    PlotRect::from_ltwh(plot.right() + GAP, plot.top, BAR_WIDTH, plot.height)
}

/// One horizontal strip per pixel row (at least two), sampling the ramp from
/// `vmax` at the top to `vmin` at the bottom. Strips overlap by half a pixel
/// so no seams show.
pub fn strips(bar: &PlotRect, vmin: f64, vmax: f64) -> Vec<(PlotRect, Rgb)> {
    let steps = bar.height.ceil().max(2.0) as usize;
    let step_h = bar.height / steps as f64;
    (0..steps)
        .map(|s| {
            let t = s as f64 / (steps - 1) as f64;
            let v = vmax - t * (vmax - vmin);
            let rect = PlotRect::from_ltwh(bar.left, bar.top + s as f64 * step_h, bar.width, step_h + 0.5);
            (rect, ramp(v, vmin, vmax))
        })
        .collect()
}

/// Pixel row of value `v` along the bar.
pub fn value_to_px(bar: &PlotRect, v: f64, vmin: f64, vmax: f64) -> f64 {
    bar.top + bar.height * (1.0 - (v - vmin) / (vmax - vmin))
}

pub fn draw_legend(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    (vmin, vmax): (f64, f64),
    theme: &Theme,
    labels: Option<&LabelPainter>,
) {
    let bar = bar_rect(plot);
    for (rect, color) in strips(&bar, vmin, vmax) {
        canvas.draw_rect(rect.to_skia(), &fill(color, false));
    }
    // strips may spill half a pixel past the bottom; keep the frame on top
    canvas.draw_rect(bar.to_skia(), &stroke(theme.label, 1.0));

    let values = ticks::generate(vmin, vmax);
    let positions: Vec<f64> = values.iter().map(|&v| value_to_px(&bar, v, vmin, vmax)).collect();
    let tick = stroke(theme.label, 1.0);
    for i in ticks::thin(&positions) {
        let y = positions[i];
        canvas.draw_line(pt(bar.right(), y), pt(bar.right() + TICK_LEN, y), &tick);
        if let Some(painter) = labels {
            painter.draw_anchored(canvas, &ticks::format_legend(values[i]), bar.right() + LABEL_GAP, y, 0.0, 0.5);
        }
    }
}
