// File: crates/rasterplot-core/src/ticks.rs
// Summary: Adaptive tick values, greedy label thinning and label formatting.

use crate::ranges::linspace;

/// Minimum pixel distance between two drawn tick labels.
pub const MIN_LABEL_DIST: f64 = 20.0;

/// Evenly spaced ticks covering `[min, max]` exactly.
///
/// Density follows the rounded-up span: 6 ticks up to a span of 6,
/// 8 up to 12, and 10 beyond that.
pub fn generate(min: f64, max: f64) -> Vec<f64> {
    linspace(min, max, tick_count(min, max))
}

pub fn tick_count(min: f64, max: f64) -> usize {
    let span = (max - min).ceil();
    if span <= 6.0 {
        6
    } else if span <= 12.0 {
        8
    } else {
        10
    }
}

/// Indices of the ticks whose labels get drawn.
///
/// Walks `positions` in order and skips any that fall within
/// [`MIN_LABEL_DIST`] of the last kept one.
pub fn thin(positions: &[f64]) -> Vec<usize> {
    let mut last = -1000.0;
    let mut kept = Vec::with_capacity(positions.len());
    for (i, &px) in positions.iter().enumerate() {
        if (px - last).abs() <= MIN_LABEL_DIST {
            continue;
        }
        kept.push(i);
        last = px;
    }
    kept
}

/// Axis tick label.
pub fn format_axis(v: f64) -> String {
    strip_negative_zero(format!("{v:.2}"))
}

/// Heatmap legend label.
pub fn format_legend(v: f64) -> String {
    strip_negative_zero(format!("{v:.3}"))
}

// "-0.00" -> "0.00"
fn strip_negative_zero(s: String) -> String {
    let zero = s
        .strip_prefix('-')
        .is_some_and(|rest| rest.chars().all(|c| c == '0' || c == '.'));
    if zero { s[1..].to_string() } else { s }
}
