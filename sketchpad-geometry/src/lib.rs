// BSL 1.0 License

//! Contains definitions of the geometry primitives used in the `sketchpad` crate. Every primitive here lives
//! on the integer pixel grid; there is no sub-pixel precision anywhere in this crate.
//!
//! Coordinates follow the mathematical convention: the X axis grows to the right and the Y axis grows upwards.
//! "Counter-clockwise" and "left of an edge" are meant in that frame.

#![no_std]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_possible_wrap)]

extern crate alloc;

mod clip_window;
pub use clip_window::*;

mod rectangle;
pub use rectangle::*;

use core::{convert::TryFrom, ops};

/// A point on the pixel grid.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// The Z component of the cross product of this vector and another one.
    ///
    /// This is positive when `other` lies counter-clockwise of `self`.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Point) -> i64 {
        i64::from(self.x) * i64::from(other.y) - i64::from(other.x) * i64::from(self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Point {
        Point { x, y }
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(pt: Point) -> (i32, i32) {
        (pt.x, pt.y)
    }
}

/// Component-wise. Overflow behaves as it does for `i32`.
impl ops::Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Component-wise. Overflow behaves as it does for `i32`.
impl ops::Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// A straight line between two points.
///
/// Depending on context this is treated either as a segment or, for the intersection and side tests, as the
/// infinite line through both points, directed from the first point to the second.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line {
    /// X coordinate of the first point.
    pub x1: i32,
    /// Y coordinate of the first point.
    pub y1: i32,
    /// X coordinate of the second point.
    pub x2: i32,
    /// Y coordinate of the second point.
    pub y2: i32,
}

impl Line {
    /// The first point on this line, represented by the `x1` and `y1` fields.
    #[inline]
    #[must_use]
    pub fn point1(self) -> Point {
        Point {
            x: self.x1,
            y: self.y1,
        }
    }

    /// The second point on this line, represented by the `x2` and `y2` fields.
    #[inline]
    #[must_use]
    pub fn point2(self) -> Point {
        Point {
            x: self.x2,
            y: self.y2,
        }
    }

    /// Create a line from two points.
    #[inline]
    #[must_use]
    pub fn from_points(p1: Point, p2: Point) -> Line {
        Line {
            x1: p1.x,
            y1: p1.y,
            x2: p2.x,
            y2: p2.y,
        }
    }

    /// Which side of this line the given point lies on.
    #[inline]
    #[must_use]
    pub fn orientation(self, point: Point) -> Orientation {
        Orientation::get(self.point1(), self.point2(), point)
    }

    /// Tell if a point lies in the closed half-plane to the left of this line.
    ///
    /// For an edge of a counter-clockwise polygon this is the inside of the polygon. Points exactly on the
    /// line are kept.
    #[inline]
    #[must_use]
    pub fn keeps(self, point: Point) -> bool {
        signed_area(self.point1(), self.point2(), point) >= 0
    }

    /// Get the point where the infinite lines through `self` and `other` cross.
    ///
    /// The result is computed with the 2x2 determinant formulation and truncating integer division, so it is
    /// exact whenever the true crossing lies on the grid. Returns `None` if the lines are parallel, or if the
    /// crossing is too far away to be represented.
    #[must_use]
    pub fn intersection(self, other: Line) -> Option<Point> {
        // every term stays below 2^96, so none of this can overflow
        let (x1, y1, x2, y2) = (
            i128::from(self.x1),
            i128::from(self.y1),
            i128::from(self.x2),
            i128::from(self.y2),
        );
        let (x3, y3, x4, y4) = (
            i128::from(other.x1),
            i128::from(other.y1),
            i128::from(other.x2),
            i128::from(other.y2),
        );

        let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if denom == 0 {
            return None;
        }

        let det1 = x1 * y2 - y1 * x2;
        let det2 = x3 * y4 - y3 * x4;
        let x = (det1 * (x3 - x4) - (x1 - x2) * det2) / denom;
        let y = (det1 * (y3 - y4) - (y1 - y2) * det2) / denom;

        Some(Point {
            x: i32::try_from(x).ok()?,
            y: i32::try_from(y).ok()?,
        })
    }
}

/// Twice the signed area of the triangle `(a, b, p)`. Positive when `p` lies to the left of `a -> b`.
#[inline]
fn signed_area(a: Point, b: Point, p: Point) -> i128 {
    let wide = |p: Point| (i128::from(p.x), i128::from(p.y));
    let ((ax, ay), (bx, by), (px, py)) = (wide(a), wide(b), wide(p));
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

/// Convert an iterator over a series of points into an iterator over a series of lines connecting those points.
#[inline]
pub fn polyline<I: IntoIterator<Item = Point>>(points: I) -> impl Iterator<Item = Line> {
    points
        .into_iter()
        .scan(None, |last_point, current_point| {
            // returns Some(None) if this is the first point, and Some(Some(line)) for any other point
            // where line is the line between current_point and what was in last_point
            Some(
                last_point
                    .replace(current_point)
                    .map(move |last_point| Line::from_points(last_point, current_point)),
            )
        })
        .flatten()
}

/// The turn made when walking through three points in order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The three points lie on one line.
    Colinear,
    /// The third point is to the right of the first two.
    Clockwise,
    /// The third point is to the left of the first two.
    Counterclockwise,
}

impl Orientation {
    /// Get the orientation of the triple `(p1, p2, p3)`.
    #[inline]
    #[must_use]
    pub fn get(p1: Point, p2: Point, p3: Point) -> Orientation {
        match signed_area(p1, p2, p3) {
            0 => Orientation::Colinear,
            x if x > 0 => Orientation::Counterclockwise,
            _ => Orientation::Clockwise,
        }
    }
}
