// File: crates/walkchart-core/src/line.rs
// Summary: Line generator: projects a series through two scales and serializes the polyline.

use std::fmt::Write as _;

use crate::geometry::Vec2;
use crate::scale::LinearScale;
use crate::series::Series;

/// Pixel vertices `(x_scale(p.x), y_scale(p.y))`, in series order.
pub fn project(series: &Series, x: &LinearScale, y: &LinearScale) -> Vec<Vec2> {
    series.iter().map(|p| Vec2::new(x.map(p.x), y.map(p.y))).collect()
}

/// Vertex-wise interpolation between two polylines.
///
/// Vertices beyond the shorter input take their target position directly.
pub fn interpolate(from: &[Vec2], to: &[Vec2], t: f64) -> Vec<Vec2> {
    to.iter()
        .enumerate()
        .map(|(i, &end)| match from.get(i) {
            Some(&start) => start.lerp(end, t),
            None => end,
        })
        .collect()
}

/// Linear interpolation path (`M x,y L x,y ...`). Empty input yields an empty string.
pub fn path_data(vertices: &[Vec2]) -> String {
    let mut d = String::with_capacity(vertices.len() * 16);
    for (i, v) in vertices.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        // Writing into a String cannot fail.
        let _ = write!(d, "{cmd}{},{}", fmt_num(v.x), fmt_num(v.y));
    }
    d
}

/// At most three decimals, trailing zeros dropped (`12.070` -> `12.07`, `-0` -> `0`).
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.').to_string() } else { s };
    if s == "-0" { "0".to_string() } else { s }
}
