// File: crates/rasterplot-core/src/error.rs
// Summary: Error taxonomy for chart accumulation, rendering and export.

use std::path::PathBuf;

use thiserror::Error;

use crate::chart::Mode;

#[derive(Error, Debug)]
pub enum ChartError {
    /// `render` was called before any data was accumulated.
    #[error("no data to plot")]
    EmptyInput,

    #[error("x and y must have the same length: {x} != {y}")]
    LengthMismatch { x: usize, y: usize },

    /// A chart holds either series or a single heatmap, never both.
    #[error("chart is already in {current:?} mode; cannot add {attempted:?} data")]
    ModeConflict { current: Mode, attempted: Mode },

    #[error(transparent)]
    Font(#[from] FontError),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("failed to read back surface pixels")]
    PixelRead,

    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Label typeface resolution failure. Cached process-wide, hence `Clone`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    #[error("failed to read font file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("font file {path} could not be parsed")]
    Parse { path: PathBuf },

    #[error("no usable system font found (tried {tried})")]
    NotFound { tried: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;
