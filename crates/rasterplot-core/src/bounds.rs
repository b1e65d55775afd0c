// File: crates/rasterplot-core/src/bounds.rs
// Summary: Padded data rectangle covering everything the chart currently holds.

/// Numeric rectangle `[min_x, max_x] x [min_y, max_y]` in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Pad independent x and y samples. Returns `None` if either is empty.
    ///
    /// Each axis gets a margin of a tenth of its span (at least 0.1) and is
    /// stretched so that some negative headroom exists even for all-positive
    /// data, which keeps the zero axis in view more often.
    pub fn from_axes<X, Y>(xs: X, ys: Y) -> Option<Self>
    where
        X: IntoIterator<Item = f64>,
        Y: IntoIterator<Item = f64>,
    {
        let (min_x, max_x) = raw_range(xs)?;
        let (min_y, max_y) = raw_range(ys)?;
        let (min_x, max_x) = pad(min_x, max_x);
        let (min_y, max_y) = pad(min_y, max_y);
        Some(Self { min_x, max_x, min_y, max_y })
    }

    pub fn x_span(&self) -> f64 { self.max_x - self.min_x }
    pub fn y_span(&self) -> f64 { self.max_y - self.min_y }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.min_x && x < self.max_x && y > self.min_y && y < self.max_y
    }
}

fn raw_range<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Apply the margin to one axis. The upper edge is derived from the already
/// padded lower edge.
pub(crate) fn pad(raw_min: f64, raw_max: f64) -> (f64, f64) {
    let margin = ((raw_max - raw_min) / 10.0).max(0.1);
    let min = raw_min.min(-raw_max / 10.0) - margin;
    let max = raw_max.max(-min / 10.0) + margin;
    (min, max)
}
