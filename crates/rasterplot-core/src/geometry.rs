// File: crates/rasterplot-core/src/geometry.rs
// Summary: Plot rectangle and clipping helpers for pixel math.

use crate::types::Insets;

/// Axis-aligned pixel rectangle, origin at the top-left of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Plot area left after subtracting `insets` and `extra_right` from a canvas.
    pub fn inset(canvas_w: i32, canvas_h: i32, insets: &Insets, extra_right: u32) -> Self {
        let width = (canvas_w as f64 - insets.hsum() as f64 - extra_right as f64).max(1.0);
        let height = (canvas_h as f64 - insets.vsum() as f64).max(1.0);
        Self::from_ltwh(insets.left as f64, insets.top as f64, width, height)
    }

    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }

    /// Shrink `other` to the part that lies inside `self`.
    /// Returns `None` when nothing of positive size remains.
    pub fn clip(&self, other: &PlotRect) -> Option<PlotRect> {
        let left = other.left.max(self.left);
        let top = other.top.max(self.top);
        let right = other.right().min(self.right());
        let bottom = other.bottom().min(self.bottom());
        let (w, h) = (right - left, bottom - top);
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        Some(PlotRect::from_ltwh(left, top, w, h))
    }

    /// Normalized rectangle spanning two arbitrary corners.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::from_ltwh(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs())
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_xywh(self.left as f32, self.top as f32, self.width as f32, self.height as f32)
    }
}

/// Whether pixel coordinate `v` lies on the closed interval `[lo, hi]`.
#[inline]
pub fn is_inside_axis(v: f64, lo: f64, hi: f64) -> bool {
    v >= lo && v <= hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_shrinks_partial_overlap() {
        let plot = PlotRect::from_ltwh(10.0, 10.0, 100.0, 50.0);
        let cell = PlotRect::from_ltwh(0.0, 40.0, 30.0, 40.0);
        let c = plot.clip(&cell).unwrap();
        assert_eq!(c, PlotRect::from_ltwh(10.0, 40.0, 20.0, 20.0));
    }

    #[test]
    fn clip_drops_cells_outside() {
        let plot = PlotRect::from_ltwh(10.0, 10.0, 100.0, 50.0);
        assert!(plot.clip(&PlotRect::from_ltwh(200.0, 10.0, 5.0, 5.0)).is_none());
        // touching edge only: zero width
        assert!(plot.clip(&PlotRect::from_ltwh(0.0, 10.0, 10.0, 5.0)).is_none());
    }

    #[test]
    fn inset_reserves_extra_right() {
        let r = PlotRect::inset(800, 400, &Insets::default(), 100);
        assert_eq!(r, PlotRect::from_ltwh(60.0, 40.0, 620.0, 320.0));
    }
}
