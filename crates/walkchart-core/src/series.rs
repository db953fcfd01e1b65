// File: crates/walkchart-core/src/series.rs
// Summary: Point and Series model for the single line the chart displays.

/// One sample of the walk. `x` is in data units (index * X_STEP), `y` is the walk value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered sequence of points. Replaced wholesale on every tick; no history is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Largest x value, or `None` for an empty series.
    pub fn x_max(&self) -> Option<f64> {
        max_of(self.points.iter().map(|p| p.x))
    }

    /// Largest y value, or `None` for an empty series.
    pub fn y_max(&self) -> Option<f64> {
        max_of(self.points.iter().map(|p| p.y))
    }
}

impl From<Vec<(f64, f64)>> for Series {
    fn from(data: Vec<(f64, f64)>) -> Self {
        Self { points: data.into_iter().map(Point::from).collect() }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// NaN-ignoring max, the way the chart's domain computation treats missing values.
fn max_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.filter(|v| !v.is_nan()).reduce(f64::max)
}
