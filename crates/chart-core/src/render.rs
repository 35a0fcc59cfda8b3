// File: crates/chart-core/src/render.rs
// Summary: Headless rendering of a `Chart` to PNG using Skia CPU raster surfaces.

use anyhow::{anyhow, Result};
use skia_safe as skia;

use crate::grid::nice_step;
use crate::text::{format_tick, TextShaper};
use crate::{Axis, Chart, Series, Theme};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;
/// Default cap on points drawn per series before LTTB kicks in.
pub const MAX_POINTS: usize = 2_000;

/// Screen margins around the plot area, in pixels.
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
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 40, 56)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is skipped when false, which keeps output identical across font setups.
    pub draw_labels: bool,
    pub max_points: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            max_points: MAX_POINTS,
        }
    }
}

/// Plot rectangle in pixels.
#[derive(Clone, Copy, Debug)]
struct Plot {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl Plot {
    fn sx(&self, axis: &Axis, x: f64) -> f32 {
        self.l + ((x - axis.min) / axis.span()) as f32 * (self.r - self.l)
    }

    fn sy(&self, axis: &Axis, y: f64) -> f32 {
        self.b - ((y - axis.min) / axis.span()) as f32 * (self.b - self.t)
    }

    fn rect(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.l, self.t, self.r, self.b)
    }
}

impl Chart {
    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(anyhow!("invalid surface size {}x{}", opts.width, opts.height));
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        let data = image
            .encode(None, skia::EncodedImageFormat::PNG, None)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = Plot {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32).max(opts.insets.left as i32 + 1) as f32,
            b: (opts.height - opts.insets.bottom as i32).max(opts.insets.top as i32 + 1) as f32,
        };

        let x_ticks = self.x_axis.ticks(10);
        let y_ticks = self.y_axis.ticks(6);
        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme);
        draw_axes(canvas, &plot, theme);

        canvas.save();
        canvas.clip_rect(plot.rect(), None, Some(true));
        for s in &self.series {
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, &s.downsample_lttb(opts.max_points), theme);
        }
        canvas.restore();

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_labels(canvas, &shaper, &plot, self, &x_ticks, &y_ticks, theme);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &Plot,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for &x in x_ticks {
        let px = plot.sx(x_axis, x);
        canvas.draw_line((px, plot.t), (px, plot.b), &paint);
    }
    for &y in y_ticks {
        let py = plot.sy(y_axis, y);
        canvas.draw_line((plot.l, py), (plot.r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &Plot, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    canvas.draw_line((plot.l, plot.b), (plot.r, plot.b), &paint);
    canvas.draw_line((plot.l, plot.t), (plot.l, plot.b), &paint);
}

fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &Plot,
    chart: &Chart,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let x_step = nice_step(chart.x_axis.max - chart.x_axis.min, 10);
    for &x in x_ticks {
        let px = plot.sx(&chart.x_axis, x);
        shaper.draw_centered(canvas, &format_tick(x, x_step), px, plot.b + 18.0, 12.0, theme.tick);
    }
    let y_step = nice_step(chart.y_axis.max - chart.y_axis.min, 6);
    for &y in y_ticks {
        let py = plot.sy(&chart.y_axis, y);
        shaper.draw_right(canvas, &format_tick(y, y_step), plot.l - 8.0, py + 4.0, 12.0, theme.tick);
    }

    let mid_x = (plot.l + plot.r) * 0.5;
    shaper.draw_centered(canvas, &chart.x_axis.label, mid_x, plot.b + 42.0, 14.0, theme.axis_label);
    shaper.draw_left(canvas, &chart.y_axis.label, 8.0, plot.t - 14.0, 14.0, theme.axis_label);
    if !chart.title.is_empty() {
        shaper.draw_centered(canvas, &chart.title, mid_x, plot.t - 14.0, 16.0, theme.axis_label);
    }
}

/// Stroke the series as one path; non-finite values break the line.
fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &Plot,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    theme: &Theme,
) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut drawn = 0usize;
    for &(x, y) in &series.points {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (plot.sx(x_axis, x), plot.sy(y_axis, y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
        drawn += 1;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_color(theme.line_stroke);

    if drawn == 1 {
        // A lone point has no segment to stroke.
        if let Some(&(x, y)) = series.points.iter().find(|(x, y)| x.is_finite() && y.is_finite()) {
            stroke.set_style(skia::paint::Style::Fill);
            canvas.draw_circle((plot.sx(x_axis, x), plot.sy(y_axis, y)), 3.0, &stroke);
        }
        return;
    }

    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &stroke);
}
