//! Points, polygons and 2-D affine transforms.

use std::fmt::Write as _;

use serde::Serialize;

/// A point in diagram coordinates (y grows downward, as in SVG).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A closed polygon. An empty vertex list means "draw nothing".
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// The degenerate polygon.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Axis-aligned rectangle, traced from the bottom-left corner counter-clockwise
    /// on screen.
    pub fn rect(x: f64, top: f64, width: f64, height: f64) -> Self {
        let bottom = top + height;
        Self::new(vec![
            Point::new(x, bottom),
            Point::new(x + width, bottom),
            Point::new(x + width, top),
            Point::new(x, top),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertical extent of the polygon (0 when empty).
    pub fn height(&self) -> f64 {
        let (min, max) = self.y_range();
        max - min
    }

    /// Horizontal extent of the polygon (0 when empty).
    pub fn width(&self) -> f64 {
        let (min, max) = self.x_range();
        max - min
    }

    pub fn x_range(&self) -> (f64, f64) {
        extent(self.vertices.iter().map(|p| p.x))
    }

    pub fn y_range(&self) -> (f64, f64) {
        extent(self.vertices.iter().map(|p| p.y))
    }

    /// Whether every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// SVG path data (`M x,y L x,y ... Z`). The empty polygon yields `""`.
    pub fn to_path_data(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.vertices.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            let _ = write!(d, "{cmd} {},{}", coord(p.x), coord(p.y));
        }
        if !d.is_empty() {
            d.push_str(" Z");
        }
        d
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max { (0.0, 0.0) } else { (min, max) }
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn coord(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// 2-D affine transform in SVG matrix order:
///
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn translate(dx: f64, dy: f64) -> Self {
        Self {
            e: dx,
            f: dy,
            ..Self::IDENTITY
        }
    }

    /// Horizontal scale by `sx` that keeps the vertical line `x = anchor_x` fixed.
    ///
    /// Equivalent to `translate(anchor_x) scale(sx, 1) translate(-anchor_x)`.
    pub fn scale_x_about(anchor_x: f64, sx: f64) -> Self {
        Self {
            a: sx,
            e: anchor_x * (1.0 - sx),
            ..Self::IDENTITY
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f]
            .iter()
            .all(|v| v.is_finite())
    }

    /// SVG `transform` attribute value.
    pub fn to_svg(&self) -> String {
        format!(
            "matrix({},{},{},{},{},{})",
            coord(self.a),
            coord(self.b),
            coord(self.c),
            coord(self.d),
            coord(self.e),
            coord(self.f)
        )
    }
}
