// File: crates/rasterplot-core/src/text.rs
// Summary: Process-wide label typeface and anchored text drawing.

use std::path::PathBuf;
use std::sync::OnceLock;

use skia_safe as skia;

use crate::color::Rgb;
use crate::error::FontError;

/// Environment variable naming a font file to use for all labels.
pub const FONT_ENV: &str = "RASTERPLOT_FONT";

/// Families tried, in order, when no font file is configured.
const FAMILIES: &[&str] = &["Arial", "Helvetica", "DejaVu Sans", "Liberation Sans"];

static LABEL_TYPEFACE: OnceLock<Result<skia::Typeface, FontError>> = OnceLock::new();

/// The shared label typeface, resolved on first use and cached for the
/// life of the process (including a failure).
pub fn label_typeface() -> Result<skia::Typeface, FontError> {
    LABEL_TYPEFACE.get_or_init(load_typeface).clone()
}

fn load_typeface() -> Result<skia::Typeface, FontError> {
    let mgr = skia::FontMgr::default();
    if let Some(path) = std::env::var_os(FONT_ENV).map(PathBuf::from) {
        let bytes = std::fs::read(&path)
            .map_err(|e| FontError::Read { path: path.clone(), reason: e.to_string() })?;
        let tf = mgr
            .new_from_data(&bytes, None)
            .ok_or(FontError::Parse { path: path.clone() })?;
        tracing::debug!(path = %path.display(), family = %tf.family_name(), "loaded label font file");
        return Ok(tf);
    }
    match_first_family(&mgr, FAMILIES)
}

/// First of `families` the font manager knows. No platform default is
/// substituted when none match.
fn match_first_family(mgr: &skia::FontMgr, families: &[&str]) -> Result<skia::Typeface, FontError> {
    for family in families {
        if let Some(tf) = mgr.match_family_style(family, skia::FontStyle::normal()) {
            tracing::debug!(family, "resolved label font");
            return Ok(tf);
        }
    }
    tracing::warn!(tried = ?families, "no label font family available");
    Err(FontError::NotFound { tried: families.join(", ") })
}

/// Draws short labels anchored relative to a point, in one font and size.
pub struct LabelPainter {
    font: skia::Font,
    paint: skia::Paint,
}

impl LabelPainter {
    pub fn new(typeface: skia::Typeface, size: f32, color: Rgb) -> Self {
        let font = skia::Font::from_typeface(typeface, size.max(1.0));
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color.to_skia());
        Self { font, paint }
    }

    pub fn measure_width(&self, text: &str) -> f32 {
        self.font.measure_str(text, Some(&self.paint)).0
    }

    /// Draw `text` so that the point `(x, y)` sits at fraction `ax` of its
    /// width and `ay` of its cap height, measured from the left/top edge.
    /// `(0.5, 0.5)` centers the label on the point.
    pub fn draw_anchored(&self, canvas: &skia::Canvas, text: &str, x: f64, y: f64, ax: f32, ay: f32) {
        let w = self.measure_width(text);
        let (_, metrics) = self.font.metrics();
        let h = if metrics.cap_height > 0.0 { metrics.cap_height } else { self.font.size() * 0.7 };
        let left = x as f32 - ax * w;
        let baseline = y as f32 + ay * h;
        canvas.draw_str(text, (left, baseline), &self.font, &self.paint);
    }

    /// Draw `text` with its baseline starting at `(x, y)`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f64, y: f64) {
        canvas.draw_str(text, (x as f32, y as f32), &self.font, &self.paint);
    }
}
