// File: crates/rasterplot-core/src/chart.rs
// Summary: Chart struct (data accumulation, mode) and the render pipeline on a Skia CPU raster surface.

use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::axis::{draw_axes, AxisLayout};
use crate::bounds::Bounds;
use crate::error::{ChartError, Result};
use crate::export;
use crate::geometry::PlotRect;
use crate::heatmap::{draw_cells, Heatmap};
use crate::legend::draw_legend;
use crate::paint::{fill, stroke};
use crate::scale::Scales;
use crate::series::{draw_series, Admission, Series};
use crate::text::{label_typeface, LabelPainter};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub insets: Insets,
    /// Extra right margin in heatmap mode, for the legend.
    pub legend_reserve: u32,
    pub font_size: f32,
    /// Draw tick and point labels. When off, no font is ever loaded.
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            legend_reserve: 100,
            font_size: 14.0,
            draw_labels: true,
            theme: Theme::light(),
        }
    }
}

/// What kind of data a chart holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Unset,
    Series,
    Heatmap,
}

#[derive(Clone, Debug, Default)]
enum ChartData {
    #[default]
    Empty,
    Series(Vec<Series>),
    Heatmap(Heatmap),
}

pub struct Chart {
    width: i32,
    height: i32,
    opts: RenderOptions,
    data: ChartData,
    surface: skia::Surface,
}

impl Chart {
    /// Chart with a blank `width x height` canvas and default options.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_options(width, height, RenderOptions::default())
    }

    pub fn with_options(width: i32, height: i32, opts: RenderOptions) -> Result<Self> {
        let surface = blank_surface(width, height, &opts.theme)?;
        Ok(Self { width, height, opts, data: ChartData::Empty, surface })
    }

    /// Default-sized chart.
    pub fn default_size() -> Result<Self> {
        Self::new(WIDTH, HEIGHT)
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn options(&self) -> &RenderOptions { &self.opts }

    pub fn set_options(&mut self, opts: RenderOptions) {
        self.opts = opts;
    }

    pub fn mode(&self) -> Mode {
        match self.data {
            ChartData::Empty => Mode::Unset,
            ChartData::Series(_) => Mode::Series,
            ChartData::Heatmap(_) => Mode::Heatmap,
        }
    }

    pub fn series(&self) -> &[Series] {
        match &self.data {
            ChartData::Series(list) => list,
            _ => &[],
        }
    }

    pub fn heatmap(&self) -> Option<&Heatmap> {
        match &self.data {
            ChartData::Heatmap(hm) => Some(hm),
            _ => None,
        }
    }

    /// Add a series. Fails on unequal x/y lengths or when the chart holds a
    /// heatmap; silently ignores empty data, a missing style, or a label
    /// count that does not match.
    pub fn add_series(&mut self, series: Series) -> Result<()> {
        if let ChartData::Heatmap(_) = self.data {
            return Err(ChartError::ModeConflict { current: Mode::Heatmap, attempted: Mode::Series });
        }
        if let Admission::Ignore(reason) = series.admission()? {
            tracing::debug!(reason, "ignoring series");
            return Ok(());
        }
        match &mut self.data {
            ChartData::Series(list) => list.push(series),
            data => *data = ChartData::Series(vec![series]),
        }
        Ok(())
    }

    /// Set the single heatmap. Fails once any data has been added; silently
    /// ignores empty or mis-shaped grids.
    pub fn set_heatmap(&mut self, heatmap: Heatmap) -> Result<()> {
        let current = self.mode();
        if current != Mode::Unset {
            return Err(ChartError::ModeConflict { current, attempted: Mode::Heatmap });
        }
        if let Admission::Ignore(reason) = heatmap.admission() {
            tracing::debug!(reason, "ignoring heatmap");
            return Ok(());
        }
        self.data = ChartData::Heatmap(heatmap);
        Ok(())
    }

    /// Drop all data and blank the canvas. Size is kept.
    pub fn clear(&mut self) {
        self.data = ChartData::Empty;
        self.surface.canvas().clear(self.opts.theme.background.to_skia());
    }

    /// Drop all data and replace the canvas with a blank one of a new size.
    pub fn clear_with_resize(&mut self, width: i32, height: i32) -> Result<()> {
        self.surface = blank_surface(width, height, &self.opts.theme)?;
        self.width = width;
        self.height = height;
        self.data = ChartData::Empty;
        Ok(())
    }

    /// Padded bounds of the current data, `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        match &self.data {
            ChartData::Empty => None,
            ChartData::Series(list) => Bounds::from_axes(
                list.iter().flat_map(|s| s.x.iter().copied()),
                list.iter().flat_map(|s| s.y.iter().copied()),
            ),
            ChartData::Heatmap(hm) => Bounds::from_axes(hm.x.iter().copied(), hm.y.iter().copied()),
        }
    }

    /// Plot rectangle for the current mode.
    pub fn plot_rect(&self) -> PlotRect {
        let extra = if self.mode() == Mode::Heatmap { self.opts.legend_reserve } else { 0 };
        PlotRect::inset(self.width, self.height, &self.opts.insets, extra)
    }

    /// Data-to-pixel transforms the next `render` will use.
    pub fn scales(&self) -> Option<Scales> {
        self.bounds().map(|b| Scales::new(&b, self.plot_rect()))
    }

    /// Draw the finished chart onto the canvas.
    pub fn render(&mut self) -> Result<()> {
        let mode = self.mode();
        let bounds = self.bounds().ok_or(ChartError::EmptyInput)?;
        let labels = if self.opts.draw_labels {
            Some(LabelPainter::new(label_typeface()?, self.opts.font_size, self.opts.theme.label))
        } else {
            None
        };
        let plot = self.plot_rect();
        let scales = Scales::new(&bounds, plot);
        tracing::debug!(?mode, ?bounds, ?plot, "rendering chart");

        let theme = self.opts.theme;
        let canvas = self.surface.canvas();
        canvas.clear(theme.background.to_skia());
        canvas.draw_rect(plot.to_skia(), &fill(theme.plot_area, false));
        canvas.draw_rect(plot.to_skia(), &stroke(theme.border, 1.0));

        match &self.data {
            ChartData::Empty => return Err(ChartError::EmptyInput),
            ChartData::Series(list) => {
                let layout: AxisLayout = draw_axes(canvas, &bounds, &scales, &theme, labels.as_ref(), true);
                draw_series(canvas, list, &scales, &layout, labels.as_ref());
            }
            ChartData::Heatmap(hm) => {
                // cells cover the in-plot axis lines; labels outside the plot remain
                draw_axes(canvas, &bounds, &scales, &theme, labels.as_ref(), false);
                draw_cells(canvas, &hm.cells(&bounds, &scales));
                draw_legend(canvas, &plot, hm.value_range(), &theme, labels.as_ref());
            }
        }
        Ok(())
    }

    /// Encode the current canvas as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        let data = image
            .encode(None, skia::EncodedImageFormat::PNG, None)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Read the canvas back as unpremultiplied RGBA8.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.width, self.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::PixelRead);
        }
        Ok((px, w as u32, h as u32, stride))
    }

    /// Write the canvas as PNG to `path`. Unless `overwrite` is set, an
    /// existing file is kept and `<stem>_1`, `<stem>_2`, ... is used instead.
    /// Returns the path written.
    pub fn export_png(&mut self, path: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        let bytes = self.png_bytes()?;
        export::write_file(path.as_ref(), &bytes, overwrite)
    }
}

fn blank_surface(width: i32, height: i32, theme: &Theme) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::Surface { width, height })?;
    surface.canvas().clear(theme.background.to_skia());
    Ok(surface)
}
