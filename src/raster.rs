// MIT/Apache2 License

//! Incremental line rasterization.
//!
//! Both rasterizers here only know how to walk a line in octant zero, where X increases and the slope lies in
//! `[0, 1]`. Every other line is mapped into that octant, walked, and mapped back out.

use crate::Point;
use std::fmt;

/// One of the eight slope octants a line can fall into.
///
/// Octants are numbered counter-clockwise starting from the shallow, rightward, upward direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Octant(u8);

impl Octant {
    /// Classify the direction `(dx, dy)`.
    #[inline]
    pub fn from_delta(dx: i64, dy: i64) -> Octant {
        let index = match (dx >= 0, dy >= 0) {
            (true, true) if dx >= dy => 0,
            (true, true) => 1,
            (false, true) if -dx >= dy => 3,
            (false, true) => 2,
            (false, false) if -dx >= -dy => 4,
            (false, false) => 5,
            (true, false) if dx >= -dy => 7,
            (true, false) => 6,
        };

        Octant(index)
    }

    /// The number of this octant, in `0..8`.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Map a point from this octant into octant zero.
    ///
    /// Coordinates are widened so that mirroring a point on the edge of the grid cannot overflow.
    #[inline]
    pub fn to_octant_zero(self, (x, y): (i64, i64)) -> (i64, i64) {
        match self.0 {
            0 => (x, y),
            1 => (y, x),
            2 => (y, -x),
            3 => (-x, y),
            4 => (-x, -y),
            5 => (-y, -x),
            6 => (-y, x),
            _ => (x, -y),
        }
    }

    /// Map a point from octant zero back into this octant.
    #[inline]
    pub fn from_octant_zero(self, (x, y): (i64, i64)) -> (i64, i64) {
        match self.0 {
            0 => (x, y),
            1 => (y, x),
            2 => (-y, x),
            3 => (-x, y),
            4 => (-x, -y),
            5 => (-y, -x),
            6 => (y, -x),
            _ => (x, -y),
        }
    }
}

impl fmt::Display for Octant {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "octant {}", self.0)
    }
}

/// Something that turns two endpoints into the pixels between them.
pub trait LineRasterizer {
    /// Append the pixels of the line from `from` to `to` onto `out`.
    ///
    /// Both endpoints are included, `from` first and `to` last.
    fn line(&self, from: Point, to: Point, out: &mut Vec<Point>);
}

/// Classic integer Bresenham line drawing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Bresenham;

impl LineRasterizer for Bresenham {
    #[inline]
    fn line(&self, from: Point, to: Point, out: &mut Vec<Point>) {
        walk_normalized(from, to, out, |(x0, y0), (x1, y1), emit| {
            let (dx, dy) = (x1 - x0, y1 - y0);
            let mut decision = 2 * dy - dx;
            let mut y = y0;

            for x in x0..=x1 {
                emit(x, y);
                if decision > 0 {
                    y += 1;
                    decision -= 2 * dx;
                }
                decision += 2 * dy;
            }
        });
    }
}

/// Line drawing through the midpoint error recurrence.
///
/// The pixels match `Bresenham` exactly; only the bookkeeping differs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Midpoint;

impl LineRasterizer for Midpoint {
    #[inline]
    fn line(&self, from: Point, to: Point, out: &mut Vec<Point>) {
        walk_normalized(from, to, out, |(x0, y0), (x1, y1), emit| {
            let (dx, dy) = (x1 - x0, y1 - y0);
            let inc_e = 2 * dy;
            let inc_ne = 2 * (dy - dx);
            let mut decision = 2 * dy - dx;
            let (mut x, mut y) = (x0, y0);

            emit(x, y);
            while x < x1 {
                if decision > 0 {
                    decision += inc_ne;
                    y += 1;
                } else {
                    decision += inc_e;
                }
                x += 1;
                emit(x, y);
            }
        });
    }
}

/// Run `walk` in octant zero, mapping every pixel it emits back into the line's own octant.
#[inline]
fn walk_normalized<F>(from: Point, to: Point, out: &mut Vec<Point>, walk: F)
where
    F: FnOnce((i64, i64), (i64, i64), &mut dyn FnMut(i64, i64)),
{
    let from = (i64::from(from.x), i64::from(from.y));
    let to = (i64::from(to.x), i64::from(to.y));
    let octant = Octant::from_delta(to.0 - from.0, to.1 - from.1);

    let mut emit = |x, y| {
        let (x, y) = octant.from_octant_zero((x, y));
        // every pixel lies within the bounding box of the endpoints
        #[allow(clippy::cast_possible_truncation)]
        out.push(Point::new(x as i32, y as i32));
    };

    walk(
        octant.to_octant_zero(from),
        octant.to_octant_zero(to),
        &mut emit,
    );
}

/// How lines are turned into pixels when rendering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LineStrategy {
    /// Hand the points to the surface as a continuous path and let it draw the lines.
    DirectStrip,
    /// Rasterize with `Bresenham`.
    Bresenham,
    /// Rasterize with `Midpoint`.
    Midpoint,
}

impl Default for LineStrategy {
    #[inline]
    fn default() -> Self {
        LineStrategy::Bresenham
    }
}

impl LineStrategy {
    /// The rasterizer for this strategy, or `None` if the surface draws the lines itself.
    #[inline]
    pub fn rasterizer(self) -> Option<&'static dyn LineRasterizer> {
        match self {
            LineStrategy::DirectStrip => None,
            LineStrategy::Bresenham => Some(&Bresenham),
            LineStrategy::Midpoint => Some(&Midpoint),
        }
    }
}

/// Rasterize a whole polyline.
///
/// Points where two segments meet are only emitted once. If `closed` is set and there are more than two points,
/// an edge from the last point back to the first is added as well.
pub fn rasterize_polyline(
    rasterizer: &dyn LineRasterizer,
    points: &[Point],
    closed: bool,
) -> Vec<Point> {
    let mut out = Vec::new();

    match points {
        [] => return out,
        [single] => {
            out.push(*single);
            return out;
        }
        _ => {}
    }

    for pair in points.windows(2) {
        // the previous segment already emitted this joint
        out.pop();
        rasterizer.line(pair[0], pair[1], &mut out);
    }

    if closed && points.len() > 2 {
        out.pop();
        rasterizer.line(points[points.len() - 1], points[0], &mut out);
        // the first point is already at the front
        out.pop();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINTS: &[(i32, i32)] = &[
        (10, 0),
        (10, 3),
        (10, 10),
        (3, 10),
        (0, 10),
        (-3, 10),
        (-10, 10),
        (-10, 3),
        (-10, 0),
        (-10, -3),
        (-10, -10),
        (-3, -10),
        (0, -10),
        (3, -10),
        (10, -10),
        (10, -3),
        (7, 2),
        (-2, 9),
        (-9, -4),
        (4, -7),
    ];

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    fn rasterize(rasterizer: &dyn LineRasterizer, from: Point, to: Point) -> Vec<Point> {
        let mut out = Vec::new();
        rasterizer.line(from, to, &mut out);
        out
    }

    #[test]
    fn test_octant_classification() {
        let expected = [
            ((5, 2), 0),
            ((2, 5), 1),
            ((-2, 5), 2),
            ((-5, 2), 3),
            ((-5, -2), 4),
            ((-2, -5), 5),
            ((2, -5), 6),
            ((5, -2), 7),
        ];

        for &((dx, dy), index) in &expected {
            let octant = Octant::from_delta(dx, dy);
            assert_eq!(octant.index(), index);

            let (x, y) = octant.to_octant_zero((dx, dy));
            assert!(x >= 0 && y >= 0 && y <= x);
            assert_eq!(octant.from_octant_zero((x, y)), (dx, dy));
        }
    }

    #[test]
    fn test_shallow_line() {
        let expected = pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
        assert_eq!(
            rasterize(&Bresenham, Point::new(0, 0), Point::new(5, 2)),
            expected
        );

        let mut reversed = expected;
        reversed.reverse();
        assert_eq!(
            rasterize(&Bresenham, Point::new(5, 2), Point::new(0, 0)),
            reversed
        );
    }

    #[test]
    fn test_axis_and_diagonal_agree() {
        let horizontal = rasterize(&Bresenham, Point::new(0, 0), Point::new(10, 0));
        assert_eq!(
            horizontal,
            (0..=10).map(|x| Point::new(x, 0)).collect::<Vec<_>>()
        );
        assert_eq!(
            rasterize(&Midpoint, Point::new(0, 0), Point::new(10, 0)),
            horizontal
        );

        let diagonal = rasterize(&Bresenham, Point::new(0, 0), Point::new(10, 10));
        assert_eq!(
            diagonal,
            (0..=10).map(|i| Point::new(i, i)).collect::<Vec<_>>()
        );
        assert_eq!(
            rasterize(&Midpoint, Point::new(0, 0), Point::new(10, 10)),
            diagonal
        );
    }

    #[test]
    fn test_every_octant_is_continuous() {
        let origin = Point::new(3, -4);

        for rasterizer in &[&Bresenham as &dyn LineRasterizer, &Midpoint] {
            for &(dx, dy) in ENDPOINTS {
                let to = origin + Point::new(dx, dy);
                let line = rasterize(*rasterizer, origin, to);

                assert_eq!(line[0], origin);
                assert_eq!(line[line.len() - 1], to);
                assert_eq!(line.len() as i32, dx.abs().max(dy.abs()) + 1);

                let steep = dy.abs() > dx.abs();
                for pair in line.windows(2) {
                    let step = pair[1] - pair[0];
                    assert!(step.x.abs() <= 1 && step.y.abs() <= 1);

                    // the major axis moves on every single step
                    let major = if steep { step.y } else { step.x };
                    assert_eq!(major.abs(), 1);
                }
            }
        }
    }

    #[test]
    fn test_midpoint_matches_bresenham() {
        for &(dx, dy) in ENDPOINTS {
            let to = Point::new(dx, dy);
            assert_eq!(
                rasterize(&Midpoint, Point::default(), to),
                rasterize(&Bresenham, Point::default(), to)
            );
        }
    }

    #[test]
    fn test_lines_at_grid_limits() {
        let span = i64::from(i32::MAX) - i64::from(i32::MIN);
        assert_eq!(Octant::from_delta(span, 0).index(), 0);
        assert_eq!(Octant::from_delta(-span, -span).index(), 4);

        // walking back towards the corner mirrors i32::MIN in octant zero
        let corner = Point::new(i32::MIN, i32::MIN);
        let near = Point::new(i32::MIN + 4, i32::MIN + 2);
        for rasterizer in &[&Bresenham as &dyn LineRasterizer, &Midpoint] {
            let forward = rasterize(*rasterizer, corner, near);
            let backward = rasterize(*rasterizer, near, corner);
            assert_eq!(forward.len(), 5);
            assert_eq!(backward.len(), 5);
            assert_eq!(backward[0], near);
            assert_eq!(backward[4], corner);
        }

        let top = Point::new(i32::MAX, i32::MAX);
        let below = Point::new(i32::MAX - 1, i32::MAX - 3);
        assert_eq!(
            rasterize(&Bresenham, top, below),
            vec![
                top,
                Point::new(i32::MAX, i32::MAX - 1),
                Point::new(i32::MAX - 1, i32::MAX - 2),
                below
            ]
        );
    }

    #[test]
    fn test_degenerate_line() {
        let p = Point::new(4, 4);
        assert_eq!(rasterize(&Bresenham, p, p), vec![p]);
        assert_eq!(rasterize(&Midpoint, p, p), vec![p]);
    }

    #[test]
    fn test_polyline_joints() {
        let square = pts(&[(0, 0), (3, 0), (3, 3), (0, 3)]);

        let open = rasterize_polyline(&Bresenham, &square, false);
        assert_eq!(
            open,
            pts(&[
                (0, 0),
                (1, 0),
                (2, 0),
                (3, 0),
                (3, 1),
                (3, 2),
                (3, 3),
                (2, 3),
                (1, 3),
                (0, 3)
            ])
        );

        let closed = rasterize_polyline(&Bresenham, &square, true);
        assert_eq!(closed.len(), 12);
        assert_eq!(&closed[..open.len()], &open[..]);
        assert_eq!(&closed[open.len()..], &pts(&[(0, 2), (0, 1)])[..]);
    }

    #[test]
    fn test_polyline_short_inputs() {
        assert!(rasterize_polyline(&Midpoint, &[], true).is_empty());
        assert_eq!(
            rasterize_polyline(&Midpoint, &[Point::new(1, 1)], true),
            vec![Point::new(1, 1)]
        );
        // two points never get a closing edge
        assert_eq!(
            rasterize_polyline(&Midpoint, &pts(&[(0, 0), (2, 0)]), true).len(),
            3
        );
    }

    #[test]
    fn test_strategy_rasterizer() {
        assert!(LineStrategy::DirectStrip.rasterizer().is_none());
        let line = LineStrategy::Midpoint
            .rasterizer()
            .map(|r| rasterize(r, Point::new(0, 0), Point::new(0, 4)))
            .unwrap();
        assert_eq!(line.len(), 5);
    }
}
