//! Geometric primitives for positional shape data.
//!
//! This module provides the types used to carry raw positional data from
//! input shapes into the visual model:
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Bounds`] - A rectangular region given by its upper-left and
//!   lower-right corners
//!
//! # Coordinate System
//!
//! Millrace uses the coordinate system of the diagram interchange format:
//! origin at the top-left corner, X increasing rightward, Y increasing
//! downward. Bounds are carried through conversion verbatim; no layout or
//! rendering computation happens on them.

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use millrace_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x(), 10.0);
/// assert_eq!(p.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// A rectangular region defined by its upper-left and lower-right corners.
///
/// This mirrors the bounds representation of the diagram interchange
/// format, so the raw values survive the round trip from input shape to
/// visual node without reinterpretation.
///
/// # Examples
///
/// ```
/// # use millrace_core::geometry::{Bounds, Point};
/// let bounds = Bounds::new(Point::new(10.0, 10.0), Point::new(40.0, 30.0));
/// assert_eq!(bounds.width(), 30.0);
/// assert_eq!(bounds.height(), 20.0);
/// assert!(bounds.contains(Point::new(25.0, 20.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    upper_left: Point,
    lower_right: Point,
}

impl Bounds {
    /// Creates bounds from the two corner points.
    pub fn new(upper_left: Point, lower_right: Point) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    /// Returns the upper-left corner.
    pub fn upper_left(self) -> Point {
        self.upper_left
    }

    /// Returns the lower-right corner.
    pub fn lower_right(self) -> Point {
        self.lower_right
    }

    /// Returns the width of the region.
    pub fn width(self) -> f32 {
        self.lower_right.x - self.upper_left.x
    }

    /// Returns the height of the region.
    pub fn height(self) -> f32 {
        self.lower_right.y - self.upper_left.y
    }

    /// Returns the center point of the region.
    pub fn center(self) -> Point {
        Point::new(
            (self.upper_left.x + self.lower_right.x) / 2.0,
            (self.upper_left.y + self.lower_right.y) / 2.0,
        )
    }

    /// Returns `true` if the given point lies within the region
    /// (corners included).
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.upper_left.x
            && point.x <= self.lower_right.x
            && point.y >= self.upper_left.y
            && point.y <= self.lower_right.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_dimensions() {
        let bounds = Bounds::new(Point::new(5.0, 10.0), Point::new(25.0, 50.0));
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 40.0);
        assert_eq!(bounds.center(), Point::new(15.0, 30.0));
    }

    #[test]
    fn bounds_contains_corners() {
        let bounds = Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(!bounds.contains(Point::new(10.1, 5.0)));
    }
}
