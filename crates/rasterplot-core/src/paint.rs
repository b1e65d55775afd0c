// File: crates/rasterplot-core/src/paint.rs
// Summary: Paint constructors shared by the axis, series and heatmap renderers.

use skia_safe as skia;

use crate::color::Rgb;

pub fn stroke(color: Rgb, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color.to_skia());
    p
}

/// Solid fill. Cells and legend strips are axis-aligned, so they are drawn
/// without anti-aliasing to keep shared edges seamless.
pub fn fill(color: Rgb, anti_alias: bool) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(anti_alias);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color.to_skia());
    p
}

#[inline]
pub fn pt(x: f64, y: f64) -> skia::Point {
    skia::Point::new(x as f32, y as f32)
}
