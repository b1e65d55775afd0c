// File: crates/rasterplot-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::bounds::Bounds;
use crate::geometry::PlotRect;

/// Horizontal transform: data x grows to the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XScale {
    pub offset: f64,
    pub min: f64,
    /// Pixels per data unit.
    pub factor: f64,
}

impl XScale {
    pub fn new(offset: f64, min: f64, max: f64, width_px: f64) -> Self {
        Self { offset, min, factor: width_px / (max - min) }
    }
    #[inline]
    pub fn to_px(&self, x: f64) -> f64 {
        self.offset + (x - self.min) * self.factor
    }
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        self.min + (px - self.offset) / self.factor
    }
}

/// Vertical transform: pixel rows grow downward while data y grows upward,
/// so the top edge of the plot maps to `max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YScale {
    pub offset: f64,
    pub max: f64,
    /// Pixels per data unit.
    pub factor: f64,
}

impl YScale {
    pub fn new(offset: f64, min: f64, max: f64, height_px: f64) -> Self {
        Self { offset, max, factor: height_px / (max - min) }
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f64 {
        self.offset + (self.max - y) * self.factor
    }
    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        self.max - (py - self.offset) / self.factor
    }
}

/// Both transforms for one render pass, plus the rectangle they map into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: XScale,
    pub y: YScale,
    pub plot: PlotRect,
}

impl Scales {
    /// Bounds never have a zero span (see `Bounds::from_axes`), so the
    /// factors are always finite.
    pub fn new(bounds: &Bounds, plot: PlotRect) -> Self {
        Self {
            x: XScale::new(plot.left, bounds.min_x, bounds.max_x, plot.width),
            y: YScale::new(plot.top, bounds.min_y, bounds.max_y, plot.height),
            plot,
        }
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x.to_px(x), self.y.to_px(y))
    }
}
