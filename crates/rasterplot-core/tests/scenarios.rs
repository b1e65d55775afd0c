// File: crates/rasterplot-core/tests/scenarios.rs
// Purpose: Pixel-level checks of where lines, cells and the legend land.

use rasterplot_core::{ticks, AxisLayout, Chart, Heatmap, LineStyle, RenderOptions, Series};

fn opts() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

fn rendered(chart: &mut Chart) -> image::RgbaImage {
    chart.render().expect("render");
    image::load_from_memory(&chart.png_bytes().expect("png")).expect("decode").to_rgba8()
}

fn rgb_at(img: &image::RgbaImage, px: f64, py: f64) -> [u8; 3] {
    let p = img.get_pixel(px.floor() as u32, py.floor() as u32);
    [p[0], p[1], p[2]]
}

#[test]
fn polyline_passes_through_scaled_vertices() {
    let mut chart = Chart::with_options(800, 400, opts()).unwrap();
    chart
        .add_series(Series::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).with_style(LineStyle::new().solid_width(6.0)))
        .unwrap();

    let bounds = chart.bounds().expect("bounds");
    assert!((bounds.min_x + 0.4).abs() < 1e-9 && (bounds.max_x - 2.2).abs() < 1e-9);
    assert!((bounds.min_y + 0.8).abs() < 1e-9 && (bounds.max_y - 4.4).abs() < 1e-9);

    let scales = chart.scales().expect("scales");
    let img = rendered(&mut chart);

    // first series draws in the first palette color
    let (vx, vy) = scales.to_px(1.0, 1.0);
    assert_eq!(rgb_at(&img, vx, vy), [255, 0, 0]);
    let (mx, my) = scales.to_px(0.5, 0.5);
    assert_eq!(rgb_at(&img, mx, my), [255, 0, 0]);

    // open plot area away from the line, axes and gridlines
    assert_eq!(rgb_at(&img, 120.0, 140.0), [250, 250, 250]);
    // left margin outside the plot
    assert_eq!(rgb_at(&img, 10.0, 200.0), [255, 255, 255]);
}

#[test]
fn second_series_uses_second_palette_color() {
    let mut chart = Chart::with_options(800, 400, opts()).unwrap();
    chart
        .add_series(Series::new(vec![0.0, 10.0], vec![10.0, 10.0]).with_style(LineStyle::new().solid()))
        .unwrap();
    chart
        .add_series(Series::new(vec![0.0, 10.0], vec![2.0, 2.0]).with_style(LineStyle::new().solid_width(6.0)))
        .unwrap();
    let scales = chart.scales().unwrap();
    let img = rendered(&mut chart);
    let (px, py) = scales.to_px(5.0, 2.0);
    assert_eq!(rgb_at(&img, px, py), [0, 0, 255]);
}

#[test]
fn heatmap_cells_follow_the_ramp() {
    let mut chart = Chart::with_options(800, 400, opts()).unwrap();
    chart
        .set_heatmap(Heatmap::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![vec![1.0, 2.0], vec![3.0, 4.0]]))
        .unwrap();

    // heatmap mode reserves room for the legend
    let plot = chart.plot_rect();
    assert_eq!((plot.left, plot.top, plot.width, plot.height), (60.0, 40.0, 620.0, 320.0));

    let scales = chart.scales().unwrap();
    let img = rendered(&mut chart);

    // bottom-left cell holds the minimum, top-right the maximum
    let (x0, y0) = scales.to_px(-0.1, -0.1);
    assert_eq!(rgb_at(&img, x0, y0), [0, 0, 255]);
    let (x1, y1) = scales.to_px(0.9, 0.9);
    assert_eq!(rgb_at(&img, x1, y1), [255, 0, 0]);
}

#[test]
fn legend_bar_runs_from_max_at_top_to_min_at_bottom() {
    let mut chart = Chart::with_options(800, 400, opts()).unwrap();
    chart
        .set_heatmap(Heatmap::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![vec![1.0, 2.0], vec![3.0, 4.0]]))
        .unwrap();
    let img = rendered(&mut chart);

    // bar spans x 700..720, y 40..360
    let [r, g, b] = rgb_at(&img, 710.0, 43.0);
    assert_eq!((r, b), (255, 0));
    assert!(g < 40, "near-max strip should be red, got g={g}");

    let [r, g, b] = rgb_at(&img, 710.0, 357.0);
    assert_eq!((r, b), (0, 255));
    assert!(g < 40, "near-min strip should be blue, got g={g}");

    // reserved area right of the bar stays background
    assert_eq!(rgb_at(&img, 780.0, 200.0), [255, 255, 255]);
}

#[test]
fn pillars_run_from_x_axis_to_point() {
    let mut chart = Chart::with_options(800, 400, opts()).unwrap();
    chart
        .add_series(Series::new(vec![1.0, 3.0], vec![2.0, 4.0]).with_style(LineStyle::new().pillars_width(6.0)))
        .unwrap();
    let scales = chart.scales().unwrap();
    let layout = AxisLayout::compute(&scales);
    assert!(layout.x_axis_inside);
    let img = rendered(&mut chart);

    let (px, py) = scales.to_px(1.0, 2.0);
    let mid = (layout.x_baseline + py) / 2.0;
    assert_eq!(rgb_at(&img, px, mid), [255, 0, 0]);
    assert_eq!(rgb_at(&img, px, layout.x_baseline - 6.0), [255, 0, 0]);
    // nothing below the axis
    assert_eq!(rgb_at(&img, px, layout.x_baseline + 20.0), [250, 250, 250]);
    // and nothing joins the two pillars
    let (qx, qy) = scales.to_px(2.0, 3.0);
    assert_ne!(rgb_at(&img, qx, qy), [255, 0, 0]);
}

#[test]
fn dots_mark_points_without_a_line() {
    let mut chart = Chart::with_options(800, 400, opts()).unwrap();
    chart
        .add_series(Series::new(vec![1.0, 3.0], vec![2.0, 4.0]).with_style(LineStyle::new().dots_radius(5.0)))
        .unwrap();
    let scales = chart.scales().unwrap();
    let img = rendered(&mut chart);

    for (x, y) in [(1.0, 2.0), (3.0, 4.0)] {
        let (px, py) = scales.to_px(x, y);
        assert_eq!(rgb_at(&img, px, py), [255, 0, 0], "dot at ({x}, {y})");
    }
    let (mx, my) = scales.to_px(2.0, 3.0);
    assert_eq!(rgb_at(&img, mx, my), [250, 250, 250]);
}

#[test]
fn style_without_modes_draws_nothing() {
    let mut chart = Chart::with_options(800, 400, opts()).unwrap();
    chart
        .add_series(Series::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).with_style(LineStyle::new()))
        .unwrap();
    assert_eq!(chart.series().len(), 1);
    let scales = chart.scales().unwrap();
    let img = rendered(&mut chart);

    let (vx, vy) = scales.to_px(1.0, 1.0);
    assert_eq!(rgb_at(&img, vx, vy), [250, 250, 250]);
    let (mx, my) = scales.to_px(0.5, 0.5);
    assert_eq!(rgb_at(&img, mx, my), [250, 250, 250]);
}

#[test]
fn heatmap_cells_cover_axes_and_tick_columns() {
    let mut chart = Chart::with_options(800, 400, opts()).unwrap();
    chart
        .set_heatmap(Heatmap::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![vec![1.0, 2.0], vec![3.0, 4.0]]))
        .unwrap();
    let bounds = chart.bounds().unwrap();
    let scales = chart.scales().unwrap();
    let layout = AxisLayout::compute(&scales);
    assert!(layout.x_axis_inside && layout.y_axis_inside);
    let img = rendered(&mut chart);
    let blue = [0, 0, 255];

    // y axis column and x axis row inside the bottom-left cell
    let (_, low_y) = scales.to_px(0.0, -0.1);
    assert_eq!(rgb_at(&img, layout.origin_x, low_y), blue);
    let (low_x, _) = scales.to_px(-0.1, 0.0);
    assert_eq!(rgb_at(&img, low_x, layout.origin_y), blue);

    // a tick column carries no gridline
    let tick_px = scales.x.to_px(ticks::generate(bounds.min_x, bounds.max_x)[1]);
    assert_eq!(rgb_at(&img, tick_px, low_y), blue);
    assert_eq!(rgb_at(&img, tick_px - 1.0, low_y), blue);
}
