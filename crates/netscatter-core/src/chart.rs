// File: crates/netscatter-core/src/chart.rs
// Summary: Scatter chart model and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::axis::Axis;
use crate::colormap::{Gradient, MinMax, Rgb};
use crate::dataset::NetworkRecord;
use crate::error::{PlotError, Result};
use crate::geometry::{content_bounds, RectI32};
use crate::grid::{format_tick, nice_step, nice_ticks, tick_decimals};
use crate::label::{HAlign, LabelPolicy, LabelTone, Placement, VAlign};
use crate::scale::LinearScale;
use crate::text::{TextShaper, TextSpec};
use crate::theme::Theme;
use crate::types::{Insets, CROP_PAD_IN, DEFAULT_DPI, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN, POINTS_PER_INCH};

/// Fraction of the params range added on each side of the x axis.
pub const X_MARGIN: f64 = 0.1;
/// Fraction of the accuracy range added on each side of the y axis.
pub const Y_MARGIN: f64 = 0.05;

const TICK_TARGET: usize = 6;
const TICK_LEN_PT: f32 = 3.5;
const TICK_PAD_PT: f32 = 3.5;
const SPINE_PT: f32 = 0.8;
const GRID_PT: f32 = 0.5;
const COLORBAR_PAD_PT: f32 = 18.0;
/// Colour bar height : width.
const COLORBAR_ASPECT: f32 = 25.0;

pub struct RenderOptions {
    /// Figure size in inches (width, height).
    pub figure_size: (f32, f32),
    pub dpi: f32,
    /// Margins around the plot area, in points.
    pub insets: Insets,
    pub theme: Theme,
    /// Point label size in points.
    pub label_font_size: f32,
    pub axis_font_size: f32,
    pub tick_font_size: f32,
    /// Marker size in square points: the marker diameter is its square root.
    pub marker_area: f32,
    /// Text is skipped entirely when false (deterministic output for tests).
    pub draw_labels: bool,
    /// Crop to drawn content plus [`CROP_PAD_IN`].
    pub tight_crop: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            figure_size: (FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN),
            dpi: DEFAULT_DPI,
            insets: Insets::default(),
            theme: Theme::paper(),
            label_font_size: 10.0,
            axis_font_size: 12.0,
            tick_font_size: 10.0,
            marker_area: 800.0,
            draw_labels: true,
            tight_crop: true,
        }
    }
}

impl RenderOptions {
    /// Pixels per typographic point at the configured dpi.
    pub fn px_per_pt(&self) -> f32 {
        self.dpi.max(1.0) / POINTS_PER_INCH
    }

    /// Uncropped canvas size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        let dpi = self.dpi.max(1.0);
        (
            (self.figure_size.0 * dpi).round().max(1.0) as i32,
            (self.figure_size.1 * dpi).round().max(1.0) as i32,
        )
    }

    /// Marker radius in pixels.
    pub fn marker_radius_px(&self) -> f32 {
        self.marker_area.max(0.0).sqrt() * 0.5 * self.px_per_pt()
    }
}

/// One resolved marker: data position, colour and label treatment.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub color_index: usize,
    pub color: Rgb,
    pub placement: Placement,
    pub tone: LabelTone,
}

pub struct ScatterChart {
    pub records: Vec<NetworkRecord>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Raw compute range used for colour normalization.
    pub color_range: MinMax,
    pub color_label: String,
    pub gradient: Gradient,
    pub labels: LabelPolicy,
}

impl ScatterChart {
    /// Build axes and colour range from `records`. Fails on an empty input.
    pub fn from_records(records: Vec<NetworkRecord>) -> Result<Self> {
        let color_range = MinMax::from_values(records.iter().map(|r| r.compute))
            .ok_or(PlotError::EmptyDataset { rows_read: records.len() })?;
        let x_axis = Axis::padded("Params (M)", records.iter().map(|r| r.params), X_MARGIN);
        let y_axis = Axis::padded("mIoU", records.iter().map(|r| r.accuracy), Y_MARGIN);
        Ok(Self {
            records,
            x_axis,
            y_axis,
            color_range,
            color_label: "GFLOPs".to_string(),
            gradient: Gradient::default(),
            labels: LabelPolicy::default(),
        })
    }

    pub fn with_labels(mut self, labels: LabelPolicy) -> Self {
        self.labels = labels;
        self
    }

    /// One marker per record, in record order.
    pub fn markers(&self) -> Vec<Marker> {
        self.records
            .iter()
            .map(|r| {
                let t = self.color_range.normalize(r.compute);
                let color_index = self.gradient.index(t);
                Marker {
                    name: r.name.clone(),
                    x: r.params,
                    y: r.accuracy,
                    color_index,
                    color: self.gradient.entries()[color_index],
                    placement: self.labels.placement(&r.name),
                    tone: self.labels.tone(&r.name),
                }
            })
            .collect()
    }

    /// Render and write a PNG to `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlotError::io(parent, e))?;
        }
        std::fs::write(path, bytes).map_err(|e| PlotError::io(path, e))?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let image = self.render_image(opts)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| PlotError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to tightly packed RGBA8: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let image = self.render_image(opts)?;
        let (w, h) = (image.width(), image.height());
        let px = read_rgba8(&image)?;
        Ok((px, w as u32, h as u32, w as usize * 4))
    }

    fn render_image(&self, opts: &RenderOptions) -> Result<skia::Image> {
        let (width, height) = opts.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| PlotError::Render("failed to create raster surface".into()))?;
        let frame = Frame::layout(opts, width, height);
        {
            let canvas = surface.canvas();
            canvas.clear(opts.theme.background);
            self.draw(canvas, &frame, opts);
        }

        let full = surface.image_snapshot();
        if !opts.tight_crop {
            return Ok(full);
        }
        let bg = opts.theme.background;
        let bounds = content_bounds(
            &read_rgba8(&full)?,
            width as usize,
            height as usize,
            [bg.r(), bg.g(), bg.b(), bg.a()],
        );
        let Some(bounds) = bounds else { return Ok(full) };
        let pad = (CROP_PAD_IN * opts.dpi.max(1.0)).round() as i32;
        let crop = bounds.outset_within(pad, width, height);
        log::debug!("cropping {}x{} canvas to {}x{}", width, height, crop.width(), crop.height());
        surface
            .image_snapshot_with_bounds(skia::IRect::from_ltrb(crop.left, crop.top, crop.right, crop.bottom))
            .ok_or_else(|| PlotError::Render("crop snapshot failed".into()))
    }

    fn draw(&self, canvas: &skia::Canvas, frame: &Frame, opts: &RenderOptions) {
        let sx = LinearScale::horizontal(&self.x_axis, frame.plot.left as f32, frame.plot.right as f32);
        let sy = LinearScale::vertical(&self.y_axis, frame.plot.top as f32, frame.plot.bottom as f32);
        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, TICK_TARGET);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, TICK_TARGET);
        let markers = self.markers();

        draw_grid(canvas, frame, &sx, &sy, &x_ticks, &y_ticks, &opts.theme);
        draw_markers(canvas, frame, &sx, &sy, &markers, opts);
        draw_frame(canvas, frame, &sx, &sy, &x_ticks, &y_ticks, &opts.theme);
        draw_colorbar_bands(canvas, frame, &self.gradient, &opts.theme);

        if !opts.draw_labels {
            return;
        }
        let shaper = TextShaper::new();
        draw_axis_text(canvas, &shaper, frame, &sx, &sy, (&self.x_axis, x_ticks.as_slice()), (&self.y_axis, y_ticks.as_slice()), opts);
        draw_point_labels(canvas, &shaper, frame, &sx, &sy, &markers, opts);
        draw_colorbar_text(canvas, &shaper, frame, &self.color_range, &self.color_label, opts);
    }
}

/// Pixel layout of one render: plot area, colour bar and point scale.
struct Frame {
    plot: RectI32,
    colorbar: RectI32,
    s: f32,
}

impl Frame {
    fn layout(opts: &RenderOptions, width: i32, height: i32) -> Self {
        let s = opts.px_per_pt();
        let ins = opts.insets.scaled(s);
        let left = ins.left.round() as i32;
        let top = ins.top.round() as i32;
        let right = (width - ins.right.round() as i32).max(left + 1);
        let bottom = (height - ins.bottom.round() as i32).max(top + 1);
        let plot = RectI32::from_ltrb(left, top, right, bottom);

        // Bar spans exactly the plot's vertical extent.
        let bar_w = ((plot.height() as f32 / COLORBAR_ASPECT).round() as i32).max(1);
        let bar_l = right + (COLORBAR_PAD_PT * s).round() as i32;
        let colorbar = RectI32::from_ltwh(bar_l, top, bar_w, plot.height());
        Self { plot, colorbar, s }
    }
}

// ---- helpers ----------------------------------------------------------------

fn rgb_to_skia(c: Rgb, alpha: u8) -> skia::Color {
    skia::Color::from_argb(alpha, c.r, c.g, c.b)
}

fn rect_f(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width.max(1.0));
    paint
}

fn read_rgba8(image: &skia::Image) -> Result<Vec<u8>> {
    let (w, h) = (image.width(), image.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut px = vec![0u8; row_bytes * h as usize];
    if !image.read_pixels(&info, px.as_mut_slice(), row_bytes, (0, 0), skia::image::CachingHint::Disallow) {
        return Err(PlotError::Render("read pixels failed".into()));
    }
    Ok(px)
}

fn draw_grid(
    canvas: &skia::Canvas,
    frame: &Frame,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let paint = stroke_paint(theme.grid, GRID_PT * frame.s);
    let p = &frame.plot;
    for &v in x_ticks {
        let x = sx.to_px(v);
        canvas.draw_line((x, p.top as f32), (x, p.bottom as f32), &paint);
    }
    for &v in y_ticks {
        let y = sy.to_px(v);
        canvas.draw_line((p.left as f32, y), (p.right as f32, y), &paint);
    }
}

fn draw_markers(
    canvas: &skia::Canvas,
    frame: &Frame,
    sx: &LinearScale,
    sy: &LinearScale,
    markers: &[Marker],
    opts: &RenderOptions,
) {
    let radius = opts.marker_radius_px();
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    canvas.save();
    canvas.clip_rect(rect_f(&frame.plot), skia::ClipOp::Intersect, true);
    for m in markers {
        fill.set_color(rgb_to_skia(m.color, opts.theme.marker_alpha));
        canvas.draw_circle((sx.to_px(m.x), sy.to_px(m.y)), radius, &fill);
    }
    canvas.restore();
}

fn draw_frame(
    canvas: &skia::Canvas,
    frame: &Frame,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let spine = stroke_paint(theme.spine, SPINE_PT * frame.s);
    let p = &frame.plot;
    canvas.draw_rect(rect_f(p), &spine);

    let len = TICK_LEN_PT * frame.s;
    for &v in x_ticks {
        let x = sx.to_px(v);
        canvas.draw_line((x, p.bottom as f32), (x, p.bottom as f32 + len), &spine);
    }
    for &v in y_ticks {
        let y = sy.to_px(v);
        canvas.draw_line((p.left as f32 - len, y), (p.left as f32, y), &spine);
    }
}

fn draw_colorbar_bands(canvas: &skia::Canvas, frame: &Frame, gradient: &Gradient, theme: &Theme) {
    let bar = &frame.colorbar;
    let n = gradient.len().max(1) as f32;
    let band_h = bar.height() as f32 / n;
    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    // Lowest value at the bottom; bands overlap by a pixel to avoid seams.
    for (i, c) in gradient.entries().iter().enumerate() {
        fill.set_color(rgb_to_skia(*c, 255));
        let bottom = bar.bottom as f32 - i as f32 * band_h;
        let top = (bottom - band_h - 1.0).max(bar.top as f32);
        canvas.draw_rect(skia::Rect::from_ltrb(bar.left as f32, top, bar.right as f32, bottom), &fill);
    }
    canvas.draw_rect(rect_f(bar), &stroke_paint(theme.spine, SPINE_PT * frame.s));
}

#[allow(clippy::too_many_arguments)]
fn draw_axis_text(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    frame: &Frame,
    sx: &LinearScale,
    sy: &LinearScale,
    (x_axis, x_ticks): (&Axis, &[f64]),
    (y_axis, y_ticks): (&Axis, &[f64]),
    opts: &RenderOptions,
) {
    let s = frame.s;
    let p = &frame.plot;
    let theme = &opts.theme;
    let tick = TextSpec::sans(opts.tick_font_size * s, theme.tick_label);
    let title = TextSpec::sans(opts.axis_font_size * s, theme.axis_label).bold();
    let gap = (TICK_LEN_PT + TICK_PAD_PT) * s;

    // X tick labels below the plot, title under them.
    let x_dec = tick_decimals(nice_step(x_axis.span(), TICK_TARGET));
    let mut tick_h: f32 = 0.0;
    for &v in x_ticks {
        let text = format_tick(v, x_dec);
        tick_h = tick_h.max(shaper.measure(&text, &tick).1);
        shaper.draw_anchored(canvas, &text, sx.to_px(v), p.bottom as f32 + gap, &tick, HAlign::Center, VAlign::Top);
    }
    let title_y = p.bottom as f32 + gap + tick_h + TICK_PAD_PT * s;
    let cx = (p.left + p.right) as f32 * 0.5;
    shaper.draw_anchored(canvas, &x_axis.label, cx, title_y, &title, HAlign::Center, VAlign::Top);

    // Y tick labels left of the plot, rotated title outside them.
    let y_dec = tick_decimals(nice_step(y_axis.span(), TICK_TARGET));
    let mut tick_w: f32 = 0.0;
    for &v in y_ticks {
        let text = format_tick(v, y_dec);
        tick_w = tick_w.max(shaper.measure(&text, &tick).0);
        shaper.draw_anchored(canvas, &text, p.left as f32 - gap, sy.to_px(v), &tick, HAlign::Right, VAlign::Center);
    }
    let (_, title_h) = shaper.measure(&y_axis.label, &title);
    let tx = p.left as f32 - gap - tick_w - TICK_PAD_PT * s - title_h * 0.5;
    let cy = (p.top + p.bottom) as f32 * 0.5;
    shaper.draw_vertical(canvas, &y_axis.label, tx, cy, &title);
}

fn draw_point_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    frame: &Frame,
    sx: &LinearScale,
    sy: &LinearScale,
    markers: &[Marker],
    opts: &RenderOptions,
) {
    let s = frame.s;
    for m in markers {
        let color = match m.tone {
            LabelTone::Highlight => opts.theme.label_highlight,
            LabelTone::Normal => opts.theme.label,
        };
        let spec = TextSpec::serif(opts.label_font_size * s, color).bold();
        let pl = m.placement;
        // Offsets are +y up; screen y grows down.
        let x = sx.to_px(m.x) + pl.dx * s;
        let y = sy.to_px(m.y) - pl.dy * s;
        shaper.draw_anchored(canvas, &m.name, x, y, &spec, pl.h_align, pl.v_align);
    }
}

fn draw_colorbar_text(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    frame: &Frame,
    range: &MinMax,
    label: &str,
    opts: &RenderOptions,
) {
    let s = frame.s;
    let bar = &frame.colorbar;
    let theme = &opts.theme;
    let tick = TextSpec::sans(opts.tick_font_size * s, theme.tick_label);
    let title = TextSpec::sans(opts.axis_font_size * s, theme.axis_label).bold();
    let spine = stroke_paint(theme.spine, SPINE_PT * s);

    // Ticks are in raw units; a flat range is shown as +-0.5 around its value.
    let axis = Axis::padded(label, [range.min, range.max], 0.0);
    let scale = LinearScale::vertical(&axis, bar.top as f32, bar.bottom as f32);
    let dec = tick_decimals(nice_step(axis.span(), TICK_TARGET));
    let len = TICK_LEN_PT * s;
    let mut tick_w: f32 = 0.0;
    for v in nice_ticks(axis.min, axis.max, TICK_TARGET) {
        let y = scale.to_px(v);
        canvas.draw_line((bar.right as f32, y), (bar.right as f32 + len, y), &spine);
        let text = format_tick(v, dec);
        tick_w = tick_w.max(shaper.measure(&text, &tick).0);
        let x = bar.right as f32 + len + TICK_PAD_PT * s;
        shaper.draw_anchored(canvas, &text, x, y, &tick, HAlign::Left, VAlign::Center);
    }

    let (_, title_h) = shaper.measure(label, &title);
    let tx = bar.right as f32 + len + 2.0 * TICK_PAD_PT * s + tick_w + title_h * 0.5;
    let cy = (bar.top + bar.bottom) as f32 * 0.5;
    shaper.draw_vertical(canvas, label, tx, cy, &title);
}
