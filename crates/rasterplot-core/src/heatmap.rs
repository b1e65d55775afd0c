// File: crates/rasterplot-core/src/heatmap.rs
// Summary: Heatmap dataset and the uniform-bin cell renderer.

use skia_safe as skia;

use crate::bounds::Bounds;
use crate::color::{ramp, value_range, Rgb};
use crate::geometry::PlotRect;
use crate::paint::fill;
use crate::scale::Scales;
use crate::series::Admission;

/// A value grid of `y.len()` rows by `x.len()` columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Heatmap {
    /// Column coordinates.
    pub x: Vec<f64>,
    /// Row coordinates.
    pub y: Vec<f64>,
    /// `values[row][col]`.
    pub values: Vec<Vec<f64>>,
}

/// One clipped, colored cell ready to fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub rect: PlotRect,
    pub color: Rgb,
}

impl Heatmap {
    pub fn new(x: Vec<f64>, y: Vec<f64>, values: Vec<Vec<f64>>) -> Self {
        Self { x, y, values }
    }

    pub fn rows(&self) -> usize { self.y.len() }
    pub fn cols(&self) -> usize { self.x.len() }

    /// Grid shape problems are ignorable, never errors.
    pub fn admission(&self) -> Admission {
        if self.x.is_empty() || self.y.is_empty() || self.values.is_empty() {
            return Admission::Ignore("empty x, y or values");
        }
        if self.values.len() != self.y.len() {
            return Admission::Ignore("row count does not match y");
        }
        if self.values.iter().any(|row| row.len() != self.x.len()) {
            return Admission::Ignore("row length does not match x");
        }
        Admission::Accept
    }

    /// `(min, max)` over all grid values; a flat grid is widened slightly.
    pub fn value_range(&self) -> (f64, f64) {
        let (lo, hi) = value_range(&self.values).unwrap_or((0.0, 0.0));
        if hi == lo { (lo, lo + 1e-9) } else { (lo, hi) }
    }

    /// Partition the bounds into `rows x cols` equal bins (ignoring the actual
    /// spacing of the row/column coordinates), color each by its value and
    /// clip it to the plot rectangle. Row 0 is the bottom row.
    pub fn cells(&self, bounds: &Bounds, scales: &Scales) -> Vec<Cell> {
        let (vmin, vmax) = self.value_range();
        let dx = bounds.x_span() / self.cols() as f64;
        let dy = bounds.y_span() / self.rows() as f64;
        let mut out = Vec::with_capacity(self.rows() * self.cols());
        for (row, values) in self.values.iter().enumerate() {
            let y0 = bounds.min_y + row as f64 * dy;
            for (col, &v) in values.iter().enumerate() {
                let x0 = bounds.min_x + col as f64 * dx;
                let (px0, py0) = scales.to_px(x0, y0);
                let (px1, py1) = scales.to_px(x0 + dx, y0 + dy);
                let Some(rect) = scales.plot.clip(&PlotRect::from_corners(px0, py0, px1, py1)) else {
                    continue;
                };
                out.push(Cell { row, col, rect, color: ramp(v, vmin, vmax) });
            }
        }
        out
    }
}

pub fn draw_cells(canvas: &skia::Canvas, cells: &[Cell]) {
    for cell in cells {
        canvas.draw_rect(cell.rect.to_skia(), &fill(cell.color, false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Heatmap {
        Heatmap::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![vec![1.0, 2.0], vec![3.0, 4.0]])
    }

    #[test]
    fn shape_mismatches_are_ignored() {
        assert_eq!(grid().admission(), Admission::Accept);
        let short_row = Heatmap::new(vec![0.0, 1.0], vec![0.0], vec![vec![1.0]]);
        assert!(matches!(short_row.admission(), Admission::Ignore(_)));
        let extra_row = Heatmap::new(vec![0.0], vec![0.0], vec![vec![1.0], vec![2.0]]);
        assert!(matches!(extra_row.admission(), Admission::Ignore(_)));
        let empty = Heatmap::new(vec![], vec![0.0], vec![vec![]]);
        assert!(matches!(empty.admission(), Admission::Ignore(_)));
    }

    #[test]
    fn cells_tile_the_plot_uniformly() {
        let hm = grid();
        let bounds = Bounds { min_x: 0.0, max_x: 2.0, min_y: 0.0, max_y: 2.0 };
        let scales = Scales::new(&bounds, PlotRect::from_ltwh(0.0, 0.0, 100.0, 100.0));
        let cells = hm.cells(&bounds, &scales);
        assert_eq!(cells.len(), 4);
        // row 0 sits at the bottom of the image
        let c00 = cells.iter().find(|c| c.row == 0 && c.col == 0).unwrap();
        assert_eq!(c00.rect, PlotRect::from_ltwh(0.0, 50.0, 50.0, 50.0));
        assert_eq!(c00.color, Rgb::new(0.0, 0.0, 1.0));
        let c11 = cells.iter().find(|c| c.row == 1 && c.col == 1).unwrap();
        assert_eq!(c11.rect, PlotRect::from_ltwh(50.0, 0.0, 50.0, 50.0));
        assert_eq!(c11.color, Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn flat_grid_has_a_nonzero_value_range() {
        let hm = Heatmap::new(vec![0.0], vec![0.0], vec![vec![5.0]]);
        let (lo, hi) = hm.value_range();
        assert!(hi > lo);
    }
}
