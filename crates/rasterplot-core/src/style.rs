// File: crates/rasterplot-core/src/style.rs
// Summary: Per-series rendering modes (solid line, point markers, pillars).

/// Independently togglable rendering modes. A style with nothing enabled
/// draws nothing; enabled modes are drawn stacked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    solid: Option<f32>,
    dots: Option<f32>,
    pillars: Option<f32>,
}

impl LineStyle {
    pub const DEFAULT_SOLID_WIDTH: f32 = 2.0;
    pub const DEFAULT_DOT_RADIUS: f32 = 3.0;
    pub const DEFAULT_PILLAR_WIDTH: f32 = 2.0;

    pub const fn new() -> Self {
        Self { solid: None, dots: None, pillars: None }
    }

    /// Connected polyline with the default stroke width.
    pub fn solid(self) -> Self { self.solid_width(Self::DEFAULT_SOLID_WIDTH) }
    pub fn solid_width(mut self, width: f32) -> Self {
        self.solid = Some(width);
        self
    }

    /// Filled circle at each point with the default radius.
    pub fn dots(self) -> Self { self.dots_radius(Self::DEFAULT_DOT_RADIUS) }
    pub fn dots_radius(mut self, radius: f32) -> Self {
        self.dots = Some(radius);
        self
    }

    /// Vertical bar from the baseline to each point.
    pub fn pillars(self) -> Self { self.pillars_width(Self::DEFAULT_PILLAR_WIDTH) }
    pub fn pillars_width(mut self, width: f32) -> Self {
        self.pillars = Some(width);
        self
    }

    pub fn solid_stroke(&self) -> Option<f32> { self.solid }
    pub fn dot_radius(&self) -> Option<f32> { self.dots }
    pub fn pillar_stroke(&self) -> Option<f32> { self.pillars }

    /// No mode enabled: the series is kept but draws nothing.
    pub fn is_empty(&self) -> bool {
        self.solid.is_none() && self.dots.is_none() && self.pillars.is_none()
    }
}

impl Default for LineStyle {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_toggle_independently() {
        assert!(LineStyle::new().is_empty());
        let s = LineStyle::new().dots().pillars_width(4.0);
        assert!(!s.is_empty());
        assert_eq!(s.solid_stroke(), None);
        assert_eq!(s.dot_radius(), Some(LineStyle::DEFAULT_DOT_RADIUS));
        assert_eq!(s.pillar_stroke(), Some(4.0));
    }
}
