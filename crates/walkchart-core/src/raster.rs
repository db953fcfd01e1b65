// File: crates/walkchart-core/src/raster.rs
// Summary: Headless raster pipeline for chart frames using Skia CPU surfaces (RGBA buffers and PNG).

use skia_safe as skia;

use crate::axis::{AxisLayout, Orient};
use crate::chart::{AxisLabel, Frame, LineFrame};
use crate::error::{ChartError, Result};
use crate::theme::{self, Theme};

pub struct RasterOptions {
    pub theme: Theme,
    /// Tick labels and axis titles; tests turn them off to avoid font variance.
    pub draw_labels: bool,
    pub font_size: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { theme: Theme::classic(), draw_labels: true, font_size: 10.0 }
    }
}

/// Render to a tightly packed, unpremultiplied RGBA buffer.
/// Returns `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(frame: &Frame, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = make_surface(frame)?;
    paint_frame(surface.canvas(), frame, opts);

    let (w, h) = (frame.width, frame.height);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    let info = skia::ImageInfo::new(
        (w as i32, h as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(ChartError::surface("read_pixels failed"));
    }
    Ok((pixels, w, h, row_bytes))
}

/// Render and encode as PNG in memory.
pub fn render_to_png_bytes(frame: &Frame, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = make_surface(frame)?;
    paint_frame(surface.canvas(), frame, opts);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::surface("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the frame to a PNG file at `output_png_path`.
pub fn render_to_png(frame: &Frame, opts: &RasterOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(frame, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

fn make_surface(frame: &Frame) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((frame.width as i32, frame.height as i32))
        .ok_or_else(|| ChartError::surface("failed to create raster surface"))
}

// ---- helpers ----------------------------------------------------------------

fn paint_frame(canvas: &skia::Canvas, frame: &Frame, opts: &RasterOptions) {
    canvas.clear(opts.theme.background);

    let mut font = skia::Font::default();
    font.set_size(opts.font_size);

    canvas.save();
    canvas.translate((frame.margins.left as f32, frame.margins.top as f32));

    canvas.save();
    canvas.translate((0.0, frame.plot.height as f32));
    draw_axis(canvas, &frame.x_axis, &opts.theme, opts.draw_labels.then_some(&font));
    canvas.restore();
    draw_axis(canvas, &frame.y_axis, &opts.theme, opts.draw_labels.then_some(&font));

    if opts.draw_labels {
        let mut title_font = skia::Font::default();
        title_font.set_size(opts.font_size * 1.4);
        for label in &frame.labels {
            draw_label(canvas, label, &title_font, opts.theme.axis_label);
        }
    }

    if let Some(line) = &frame.line {
        // The theme colour only stands in for strokes that are not CSS colours we know.
        let color = theme::css_color(&line.style.stroke).unwrap_or(opts.theme.line_stroke);
        draw_line(canvas, line, color);
    }
    canvas.restore();
}

fn draw_axis(canvas: &skia::Canvas, axis: &AxisLayout, theme: &Theme, font: Option<&skia::Font>) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(theme.axis_line);

    // Domain line with outer ticks
    let k = axis.orient.direction() as f32;
    let outer = k * axis.tick_size_outer as f32;
    let [r0, r1] = axis.range;
    let (r0, r1) = (r0 as f32, r1 as f32);
    let mut domain = skia::PathBuilder::new();
    match axis.orient {
        Orient::Bottom => {
            domain.move_to((r0, outer));
            domain.line_to((r0, 0.0));
            domain.line_to((r1, 0.0));
            domain.line_to((r1, outer));
        }
        Orient::Left => {
            domain.move_to((outer, r0));
            domain.line_to((0.0, r0));
            domain.line_to((0.0, r1));
            domain.line_to((outer, r1));
        }
    }
    canvas.draw_path(&domain.detach(), &stroke);

    let mut tick_paint = stroke.clone();
    tick_paint.set_color(theme.tick);
    let mut text_paint = skia::Paint::default();
    text_paint.set_anti_alias(true);
    text_paint.set_color(theme.tick_label);

    let (tx, ty) = axis.tick_end();
    let (lx, ly) = axis.label_anchor();
    for tick in axis.visible_ticks() {
        let alpha = tick.opacity.clamp(0.0, 1.0) as f32;
        let origin = match axis.orient {
            Orient::Bottom => (tick.offset as f32, 0.0),
            Orient::Left => (0.0, tick.offset as f32),
        };
        tick_paint.set_alpha_f(alpha);
        canvas.draw_line(origin, (origin.0 + tx as f32, origin.1 + ty as f32), &tick_paint);

        if let Some(font) = font {
            text_paint.set_alpha_f(alpha);
            let (width, _) = font.measure_str(&tick.label, Some(&text_paint));
            let size = font.size();
            let pos = match axis.orient {
                // centered under the tick, baseline ~0.71em below the anchor
                Orient::Bottom => (origin.0 + lx as f32 - width / 2.0, origin.1 + ly as f32 + size * 0.71),
                // right-aligned left of the tick, vertically centered
                Orient::Left => (origin.0 + lx as f32 - width, origin.1 + ly as f32 + size * 0.32),
            };
            canvas.draw_str(&tick.label, pos, font, &text_paint);
        }
    }
}

fn draw_label(canvas: &skia::Canvas, label: &AxisLabel, font: &skia::Font, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);

    canvas.save();
    if label.rotate != 0.0 {
        canvas.rotate(label.rotate as f32, None);
    }
    canvas.draw_str(&label.text, (label.x as f32, label.y as f32), font, &paint);
    canvas.restore();
}

fn draw_line(canvas: &skia::Canvas, line: &LineFrame, color: skia::Color) {
    let Some((first, rest)) = line.vertices.split_first() else { return };

    let mut path = skia::PathBuilder::new();
    path.move_to((first.x as f32, first.y as f32));
    for v in rest {
        path.line_to((v.x as f32, v.y as f32));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(line.style.stroke_width);
    stroke.set_color(color);

    canvas.draw_path(&path.detach(), &stroke);
}
