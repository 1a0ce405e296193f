//! Point, matrix and box types used by the positioning code

use serde::{Deserialize, Serialize};

/// A point in screen (page) pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 2D affine transform in SVGMatrix layout
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self { e: tx, f: ty, ..Self::IDENTITY }
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self { a: sx, d: sy, ..Self::IDENTITY }
    }

    /// `self * other`: applies `other` first, then `self`
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Same as `SVGPoint.matrixTransform`
    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Bounding box in an element's own coordinate space (`getBBox()`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LocalBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Pixel offset applied after anchor resolution: `[vertical, horizontal]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Offset {
    pub dy: f64,
    pub dx: f64,
}

impl Offset {
    pub const fn new(dy: f64, dx: f64) -> Self {
        Self { dy, dx }
    }
}

impl From<[f64; 2]> for Offset {
    fn from([dy, dx]: [f64; 2]) -> Self {
        Self { dy, dx }
    }
}

impl From<Offset> for [f64; 2] {
    fn from(offset: Offset) -> Self {
        [offset.dy, offset.dx]
    }
}

/// Rendered size of the overlay (`offsetWidth` / `offsetHeight`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeSize {
    pub width: f64,
    pub height: f64,
}

impl NodeSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Page scroll position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scroll {
    pub top: f64,
    pub left: f64,
}

impl Scroll {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Per axis, keeps `self` unless it is zero (`a || b` on scroll values)
    pub fn or(self, fallback: Scroll) -> Scroll {
        Scroll {
            top: if self.top != 0.0 { self.top } else { fallback.top },
            left: if self.left != 0.0 { self.left } else { fallback.left },
        }
    }
}

/// Absolute position of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

impl Placement {
    pub fn top_px(&self) -> String {
        px(self.top)
    }

    pub fn left_px(&self) -> String {
        px(self.left)
    }
}

fn px(value: f64) -> String {
    // -0 would print as "-0px"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}px", value)
}
