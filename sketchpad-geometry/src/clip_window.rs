// BSL 1.0 License

use super::{Line, Point, Rectangle};
use tinyvec::TinyVec;

const MAX_WINDOW_STACK_SIZE: usize = 8;

/// A convex polygon used as the boundary when clipping other shapes.
///
/// The vertices are expected to be wound counter-clockwise. This is not checked when the window is created,
/// since clipping against a clockwise window is well defined (it just produces the wrong result);
/// `is_counterclockwise` can be used to test it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipWindow {
    /// The vertices of the window. Most windows are rectangles, so these rarely spill onto the heap.
    vertices: TinyVec<[Point; MAX_WINDOW_STACK_SIZE]>,
}

impl ClipWindow {
    /// Create a clip window from its vertices.
    ///
    /// Returns `None` if fewer than three vertices are provided.
    pub fn new<I: IntoIterator<Item = Point>>(vertices: I) -> Option<ClipWindow> {
        let vertices: TinyVec<[Point; MAX_WINDOW_STACK_SIZE]> = vertices.into_iter().collect();

        if vertices.len() < 3 {
            None
        } else {
            Some(ClipWindow { vertices })
        }
    }

    /// Create a clip window covering a rectangle.
    #[must_use]
    pub fn from_rectangle(rect: Rectangle) -> ClipWindow {
        ClipWindow {
            vertices: rect.corners().iter().copied().collect(),
        }
    }

    /// The vertices of this window, in order.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Iterate over the edges of this window. The final edge runs from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let next = self.vertices.iter().cycle().skip(1);
        self.vertices
            .iter()
            .zip(next)
            .map(|(&from, &to)| Line::from_points(from, to))
    }

    /// Tell if the vertices are wound counter-clockwise, using the sign of the shoelace area.
    #[must_use]
    pub fn is_counterclockwise(&self) -> bool {
        let doubled_area: i128 = self
            .edges()
            .map(|edge| i128::from(edge.point1().cross(edge.point2())))
            .sum();
        doubled_area > 0
    }
}

impl From<Rectangle> for ClipWindow {
    #[inline]
    fn from(rect: Rectangle) -> Self {
        Self::from_rectangle(rect)
    }
}
