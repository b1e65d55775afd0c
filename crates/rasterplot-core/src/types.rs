// File: crates/rasterplot-core/src/types.rs
// Summary: Shared sizes and margins.

/// Default canvas width in pixels.
pub const WIDTH: i32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins around the plot rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for right-aligned y labels on the left and x labels below.
    fn default() -> Self {
        Self::new(60, 20, 40, 40)
    }
}
