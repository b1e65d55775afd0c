// File: crates/rasterplot-core/src/series.rs
// Summary: Series model (x/y data, optional point labels, line style) and the series renderer.

use skia_safe as skia;

use crate::axis::AxisLayout;
use crate::color::series_color;
use crate::error::{ChartError, Result};
use crate::paint::{fill, pt, stroke};
use crate::scale::Scales;
use crate::style::LineStyle;
use crate::text::LabelPainter;

/// Offset of a point label's baseline from its point, in pixels.
const LABEL_OFFSET: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub labels: Option<Vec<String>>,
    pub style: Option<LineStyle>,
}

/// Outcome of checking a dataset before it is added to a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Accept,
    /// Malformed in a way that is silently ignored; carries the reason for logs.
    Ignore(&'static str),
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y, labels: None, style: None }
    }

    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let (x, y) = points.iter().copied().unzip();
        Self::new(x, y)
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Empty data, a missing style and a label count that does not match the
    /// points are ignorable. Unequal x/y lengths are a caller bug.
    pub fn admission(&self) -> Result<Admission> {
        if self.x.is_empty() || self.y.is_empty() {
            return Ok(Admission::Ignore("empty x or y"));
        }
        if self.style.is_none() {
            return Ok(Admission::Ignore("no line style"));
        }
        if matches!(&self.labels, Some(l) if l.len() != self.x.len()) {
            return Ok(Admission::Ignore("label count does not match points"));
        }
        if self.x.len() != self.y.len() {
            return Err(ChartError::LengthMismatch { x: self.x.len(), y: self.y.len() });
        }
        Ok(Admission::Accept)
    }
}

/// Pixel positions of every point of `series`.
pub fn project(series: &Series, scales: &Scales) -> Vec<(f64, f64)> {
    series.points().map(|(x, y)| scales.to_px(x, y)).collect()
}

/// Pixel row pillars grow from: the x axis when visible, else the plot bottom.
pub fn pillar_base(layout: &AxisLayout) -> f64 {
    layout.x_baseline
}

/// Draw all series in insertion order, each in its palette color.
pub fn draw_series(
    canvas: &skia::Canvas,
    series: &[Series],
    scales: &Scales,
    layout: &AxisLayout,
    labels: Option<&LabelPainter>,
) {
    for (i, s) in series.iter().enumerate() {
        let Some(style) = s.style.filter(|st| !st.is_empty()) else { continue };
        let color = series_color(i);
        let pts = project(s, scales);
        tracing::trace!(series = i, points = pts.len(), ?style, "drawing series");

        if let Some(width) = style.solid_stroke() {
            let mut path = skia::Path::new();
            if let Some((&(x0, y0), rest)) = pts.split_first() {
                path.move_to(pt(x0, y0));
                for &(x, y) in rest {
                    path.line_to(pt(x, y));
                }
            }
            canvas.draw_path(&path, &stroke(color, width));
        }

        if let Some(radius) = style.dot_radius() {
            let paint = fill(color, true);
            for &(x, y) in &pts {
                canvas.draw_circle(pt(x, y), radius, &paint);
            }
        }

        if let Some(width) = style.pillar_stroke() {
            let mut paint = stroke(color, width);
            paint.set_stroke_cap(skia::paint::Cap::Square);
            let base = pillar_base(layout);
            for &(x, y) in &pts {
                canvas.draw_line(pt(x, base), pt(x, y), &paint);
            }
        }

        if let (Some(painter), Some(texts)) = (labels, &s.labels) {
            for (text, &(x, y)) in texts.iter().zip(&pts) {
                painter.draw_left(canvas, text, x + LABEL_OFFSET, y + LABEL_OFFSET);
            }
        }
    }
}
