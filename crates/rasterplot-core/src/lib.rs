// File: crates/rasterplot-core/src/lib.rs
// Summary: Core library entry point; exports the chart API, coordinate mapping and rendering helpers.

pub mod axis;
pub mod bounds;
pub mod chart;
pub mod color;
pub mod error;
pub mod export;
pub mod geometry;
pub mod heatmap;
pub mod legend;
pub mod paint;
pub mod ranges;
pub mod scale;
pub mod series;
pub mod style;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::AxisLayout;
pub use bounds::Bounds;
pub use chart::{Chart, Mode, RenderOptions};
pub use color::{ramp, Rgb, PALETTE};
pub use error::{ChartError, FontError, Result};
pub use geometry::PlotRect;
pub use heatmap::Heatmap;
pub use ranges::{int_range, linspace, uniform};
pub use scale::{Scales, XScale, YScale};
pub use series::Series;
pub use style::LineStyle;
pub use theme::Theme;
pub use types::Insets;
