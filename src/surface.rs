// MIT/Apache2 License

use crate::{Color, Point};
use lyon_path::{
    geom::LineSegment, iterator::PathIterator, math::point, Path, PathEvent,
};

/// A display backend that drawings are rendered onto.
pub trait Surface {
    /// Set the color used for everything drawn after this.
    fn set_stroke(&mut self, color: Color) -> crate::Result;

    /// Plot individual pixels.
    fn plot(&mut self, points: &[Point]) -> crate::Result;

    /// Stroke a continuous path, leaving it up to the surface how the lines are rasterized.
    fn stroke_path(&mut self, path: &Path) -> crate::Result;

    /// Flush all commands passed to this surface to its target.
    #[inline]
    fn flush(&mut self) -> crate::Result {
        Ok(())
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn set_stroke(&mut self, color: Color) -> crate::Result {
        (**self).set_stroke(color)
    }
    #[inline]
    fn plot(&mut self, points: &[Point]) -> crate::Result {
        (**self).plot(points)
    }
    #[inline]
    fn stroke_path(&mut self, path: &Path) -> crate::Result {
        (**self).stroke_path(path)
    }
    #[inline]
    fn flush(&mut self) -> crate::Result {
        (**self).flush()
    }
}

/// Build a path through the given points. Returns `None` if there are no points.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn path_from_points(points: &[Point], closed: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let to_path = |p: &Point| point(p.x as f32, p.y as f32);

    let mut builder = Path::builder();
    builder.begin(to_path(first));
    rest.iter().for_each(|p| {
        builder.line_to(to_path(p));
    });
    builder.end(closed);

    Some(builder.build())
}

/// Simple combinator to turn a path into lines.
#[inline]
pub(crate) fn path_to_lines<I: IntoIterator<Item = PathEvent>>(
    iter: I,
) -> impl Iterator<Item = LineSegment<f32>> {
    iter.into_iter()
        .flattened(0.5)
        .filter_map(|event| match event {
            PathEvent::Line { from, to } => Some(LineSegment { from, to }),
            PathEvent::End {
                last,
                first,
                close: true,
            } => Some(LineSegment {
                from: last,
                to: first,
            }),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_from_points() {
        assert!(path_from_points(&[], true).is_none());

        let square = [
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 4),
            Point::new(0, 4),
        ];
        let open = path_from_points(&square, false).unwrap();
        assert_eq!(path_to_lines(open.iter()).count(), 3);

        let closed = path_from_points(&square, true).unwrap();
        let lines: Vec<_> = path_to_lines(closed.iter()).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3].from, point(0.0, 4.0));
        assert_eq!(lines[3].to, point(0.0, 0.0));
    }
}
