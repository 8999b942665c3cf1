//! Basic geometric types in PDF page space

use serde::{Deserialize, Serialize};

/// A point in 2D page space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle defined by two corners.
///
/// Serialized the way a PDF `/Rect` array is written: `[llx, lly, urx, ury]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Rectangle {
    /// Lower-left corner
    pub lower_left: Point,
    /// Upper-right corner
    pub upper_right: Point,
}

impl Rectangle {
    /// Create a new rectangle from two points
    pub fn new(lower_left: Point, upper_right: Point) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// Create a rectangle from a PDF `/Rect` style array.
    ///
    /// PDF writers are free to store any two opposite corners, so the
    /// corners are reordered into lower-left/upper-right. The original order
    /// is not kept: `[100, 20, 10, 10]` serializes back as `[10, 10, 100, 20]`,
    /// the same box. NaN coordinates are kept as-is so validation can still
    /// see them.
    pub fn from_array(rect: [f64; 4]) -> Self {
        let [x1, y1, x2, y2] = rect;
        let (llx, urx) = if x2 < x1 { (x2, x1) } else { (x1, x2) };
        let (lly, ury) = if y2 < y1 { (y2, y1) } else { (y1, y2) };
        Self {
            lower_left: Point::new(llx, lly),
            upper_right: Point::new(urx, ury),
        }
    }

    /// The rectangle as `[llx, lly, urx, ury]`
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.lower_left.x,
            self.lower_left.y,
            self.upper_right.x,
            self.upper_right.y,
        ]
    }

    /// Get the width
    pub fn width(&self) -> f64 {
        self.upper_right.x - self.lower_left.x
    }

    /// Get the height
    pub fn height(&self) -> f64 {
        self.upper_right.y - self.lower_left.y
    }

    /// Whether every coordinate is a finite number
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 4]> for Rectangle {
    fn from(rect: [f64; 4]) -> Self {
        Self::from_array(rect)
    }
}

impl From<Rectangle> for [f64; 4] {
    fn from(rect: Rectangle) -> Self {
        rect.to_array()
    }
}
