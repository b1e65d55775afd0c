// File: crates/rasterplot-core/src/color.rs
// Summary: Series palette and the blue-cyan-green-yellow-red heatmap ramp.

use skia_safe as skia;

/// Color with unit-range channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Gray level `v` on all channels.
    pub const fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    pub fn to_u8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    pub fn to_skia(self) -> skia::Color {
        let [r, g, b] = self.to_u8();
        skia::Color::from_rgb(r, g, b)
    }
}

/// Series colors, assigned by position: series `i` uses `PALETTE[i % 6]`.
pub const PALETTE: [Rgb; 6] = [
    Rgb::new(1.0, 0.0, 0.0), // red
    Rgb::new(0.0, 0.0, 1.0), // blue
    Rgb::new(0.0, 1.0, 0.0), // green
    Rgb::new(1.0, 0.5, 0.0), // orange
    Rgb::new(0.5, 0.0, 0.5), // purple
    Rgb::new(0.0, 0.7, 0.7), // teal
];

#[inline]
pub fn series_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

/// Map `v` within `[min, max]` onto the heatmap gradient.
///
/// Four equal segments, linear within each:
/// blue -> cyan -> green -> yellow -> red. Out-of-range values clamp to
/// the end colors.
pub fn ramp(v: f64, min: f64, mut max: f64) -> Rgb {
    if max == min {
        max = min + 1e-9;
    }
    let t = ((v - min) / (max - min)).clamp(0.0, 1.0);
    if t < 0.25 {
        Rgb::new(0.0, t / 0.25, 1.0)
    } else if t < 0.5 {
        Rgb::new(0.0, 1.0, 1.0 - (t - 0.25) / 0.25)
    } else if t < 0.75 {
        Rgb::new((t - 0.5) / 0.25, 1.0, 0.0)
    } else {
        Rgb::new(1.0, 1.0 - (t - 0.75) / 0.25, 0.0)
    }
}

/// Smallest and largest value of a grid, `None` if it holds no values.
pub fn value_range(values: &[Vec<f64>]) -> Option<(f64, f64)> {
    values.iter().flatten().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-9 && (a.g - b.g).abs() < 1e-9 && (a.b - b.b).abs() < 1e-9
    }

    #[test]
    fn ends_are_blue_and_red() {
        assert_eq!(ramp(1.0, 1.0, 4.0), Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(ramp(4.0, 1.0, 4.0), Rgb::new(1.0, 0.0, 0.0));
        // clamped outside the range
        assert_eq!(ramp(-10.0, 1.0, 4.0), Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(ramp(10.0, 1.0, 4.0), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn segments_meet_at_boundaries() {
        let eps = 1e-9;
        for (edge, expect) in [
            (0.25, Rgb::new(0.0, 1.0, 1.0)),
            (0.5, Rgb::new(0.0, 1.0, 0.0)),
            (0.75, Rgb::new(1.0, 1.0, 0.0)),
        ] {
            assert!(close(ramp(edge, 0.0, 1.0), expect), "at {edge}");
            let below = ramp(edge - eps, 0.0, 1.0);
            assert!((below.r - expect.r).abs() < 1e-6);
            assert!((below.g - expect.g).abs() < 1e-6);
            assert!((below.b - expect.b).abs() < 1e-6);
        }
    }

    #[test]
    fn degenerate_range_does_not_divide_by_zero() {
        let c = ramp(3.0, 3.0, 3.0);
        assert_eq!(c, Rgb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn palette_cycles_by_position() {
        assert_eq!(series_color(0), series_color(6));
        assert_ne!(series_color(0), series_color(1));
        assert_eq!(series_color(1).to_u8(), [0, 0, 255]);
    }

    #[test]
    fn grid_value_range() {
        assert_eq!(value_range(&[vec![1.0, 2.0], vec![3.0, 4.0]]), Some((1.0, 4.0)));
        assert_eq!(value_range(&[]), None);
    }
}
