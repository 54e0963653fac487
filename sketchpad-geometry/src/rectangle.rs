// BSL 1.0 License

use super::Point;
use core::convert::TryFrom;

/// An axis-aligned rectangle in two dimensional space, defined by its origin (the corner with the lowest
/// coordinates) and its extents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rectangle {
    /// X coordinate of the origin.
    pub x: i32,
    /// Y coordinate of the origin.
    pub y: i32,
    /// Extent along the X axis.
    pub width: u32,
    /// Extent along the Y axis.
    pub height: u32,
}

impl Rectangle {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Rectangle {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// The corner with the lowest coordinates.
    #[inline]
    #[must_use]
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Tell if this rectangle has no area.
    #[inline]
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Tell if a point lies inside this rectangle. All four edges count as inside.
    #[inline]
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        let (left, bottom) = (i64::from(self.x), i64::from(self.y));

        x >= left
            && x <= left + i64::from(self.width)
            && y >= bottom
            && y <= bottom + i64::from(self.height)
    }

    /// The four corners of this rectangle, in counter-clockwise order starting from the origin.
    ///
    /// Corners past the edge of the grid are clamped onto it.
    #[must_use]
    pub fn corners(self) -> [Point; 4] {
        let far = |start: i32, extent: u32| {
            i32::try_from(i64::from(start) + i64::from(extent)).unwrap_or(i32::MAX)
        };
        let (right, top) = (far(self.x, self.width), far(self.y, self.height));

        [
            Point::new(self.x, self.y),
            Point::new(right, self.y),
            Point::new(right, top),
            Point::new(self.x, top),
        ]
    }
}
