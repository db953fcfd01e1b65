// File: crates/walkchart-core/src/svg.rs
// Summary: SVG serializer for a sampled chart frame (svg root, plot group, axes, labels, line).

use std::fmt::Write as _;
use std::path::Path;

use crate::axis::{AxisLayout, Orient};
use crate::chart::Frame;
use crate::error::Result;
use crate::line::fmt_num;

/// Serialize `frame` to a standalone `<svg>` element.
pub fn render(frame: &Frame) -> String {
    let mut svg = String::with_capacity(64 * 1024);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.width,
        h = frame.height
    );
    let _ = write!(svg, r#"<g transform="translate({},{})">"#, frame.margins.left, frame.margins.top);

    write_axis(&mut svg, "x-axis", &format!("translate(0,{})", fmt_num(frame.plot.height)), &frame.x_axis);
    write_axis(&mut svg, "y-axis", "", &frame.y_axis);

    for label in &frame.labels {
        let rotate = if label.rotate != 0.0 {
            format!(r#" transform="rotate({})""#, fmt_num(label.rotate))
        } else {
            String::new()
        };
        let _ = write!(
            svg,
            r#"<text{rotate} x="{}" y="{}">{}</text>"#,
            fmt_num(label.x),
            fmt_num(label.y),
            escape(&label.text)
        );
    }

    if let Some(line) = &frame.line {
        let _ = write!(
            svg,
            r#"<path class="line" d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            line.path_data(),
            escape(&line.style.stroke),
            fmt_num(line.style.stroke_width as f64)
        );
    }

    svg.push_str("</g></svg>");
    svg
}

/// Render `frame` and write it to `path`, creating parent directories.
pub fn write(frame: &Frame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render(frame))?;
    Ok(())
}

fn write_axis(svg: &mut String, class: &str, transform: &str, axis: &AxisLayout) {
    let (anchor, text_attrs) = match axis.orient {
        Orient::Bottom => ("middle", r#"dy="0.71em""#),
        Orient::Left => ("end", r#"dy="0.32em""#),
    };
    let transform_attr = if transform.is_empty() { String::new() } else { format!(r#" transform="{transform}""#) };
    let _ = write!(
        svg,
        r#"<g class="{class}"{transform_attr} fill="none" font-size="10" font-family="sans-serif" text-anchor="{anchor}">"#
    );
    let _ = write!(svg, r#"<path class="domain" stroke="currentColor" d="{}"/>"#, axis.domain_path());

    let (tx, ty) = axis.tick_end();
    let (lx, ly) = axis.label_anchor();
    for tick in &axis.ticks {
        let translate = match axis.orient {
            Orient::Bottom => format!("translate({},0)", fmt_num(tick.offset)),
            Orient::Left => format!("translate(0,{})", fmt_num(tick.offset)),
        };
        let _ = write!(
            svg,
            r#"<g class="tick" opacity="{}" transform="{translate}"><line stroke="currentColor" x2="{}" y2="{}"/><text fill="currentColor" x="{}" y="{}" {text_attrs}>{}</text></g>"#,
            fmt_num(tick.opacity),
            fmt_num(tx),
            fmt_num(ty),
            fmt_num(lx),
            fmt_num(ly),
            escape(&tick.label)
        );
    }
    svg.push_str("</g>");
}

pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
