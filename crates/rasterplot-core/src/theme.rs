// File: crates/rasterplot-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (background, plot area, axes, labels).

use crate::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Whole canvas.
    pub background: Rgb,
    /// Fill of the plot rectangle.
    pub plot_area: Rgb,
    pub border: Rgb,
    pub grid: Rgb,
    pub axis_line: Rgb,
    /// Tick marks, tick labels, point labels and the legend frame.
    pub label: Rgb,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::gray(1.0),
            plot_area: Rgb::gray(0.98),
            border: Rgb::gray(0.0),
            grid: Rgb::gray(0.85),
            axis_line: Rgb::gray(0.3),
            label: Rgb::gray(0.0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb::new(18.0 / 255.0, 18.0 / 255.0, 20.0 / 255.0),
            plot_area: Rgb::new(24.0 / 255.0, 24.0 / 255.0, 28.0 / 255.0),
            border: Rgb::new(180.0 / 255.0, 180.0 / 255.0, 190.0 / 255.0),
            grid: Rgb::new(40.0 / 255.0, 40.0 / 255.0, 45.0 / 255.0),
            axis_line: Rgb::new(150.0 / 255.0, 150.0 / 255.0, 160.0 / 255.0),
            label: Rgb::new(235.0 / 255.0, 235.0 / 255.0, 245.0 / 255.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find("DARK").map(|t| t.name), Some("dark"));
        assert!(find("solarized").is_none());
    }
}
