// MIT/Apache2 License

use crate::{Error, Point, Result};

/// The shape a `Drawing` represents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DrawingKind {
    /// A polyline. It is never closed, even once finished.
    OpenPath,
    /// A polyline while unfinished, and a closed loop once finished.
    ClosedLoop,
    /// The pixels found by region growing. Rendered as separate dots, never connected.
    FilledRegion,
}

/// One user-authored shape: a sequence of points with a tag telling how to interpret them.
///
/// A drawing starts out unfinished, accepting new points, and becomes immutable once `finish` is called.
/// There is always at least one point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    kind: DrawingKind,
    points: Vec<Point>,
    finished: bool,
}

impl Drawing {
    /// Start a new, unfinished drawing.
    #[inline]
    pub fn new(kind: DrawingKind, start: Point) -> Self {
        Self {
            kind,
            points: vec![start],
            finished: false,
        }
    }

    /// Create an already finished drawing from a full list of points.
    ///
    /// Returns `None` if there are no points.
    #[inline]
    pub fn finished(kind: DrawingKind, points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self {
                kind,
                points,
                finished: true,
            })
        }
    }

    /// Append a point to the end of this drawing.
    #[inline]
    pub fn add_point(&mut self, point: Point) -> Result {
        if self.finished {
            return Err(Error::invalid_state(
                "add a point",
                "the drawing is already finished",
            ));
        }

        self.points.push(point);
        Ok(())
    }

    /// Mark this drawing as finished. This can only happen once.
    #[inline]
    pub fn finish(&mut self) -> Result {
        if self.finished {
            return Err(Error::invalid_state(
                "finish the drawing",
                "the drawing is already finished",
            ));
        }

        self.finished = true;
        Ok(())
    }

    #[inline]
    pub fn kind(&self) -> DrawingKind {
        self.kind
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The most recently added point.
    #[inline]
    pub fn last_point(&self) -> Point {
        // never empty; every constructor puts at least one point in
        self.points[self.points.len() - 1]
    }

    /// The number of points in this drawing.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this drawing a filled region?
    #[inline]
    pub fn is_region(&self) -> bool {
        matches!(self.kind, DrawingKind::FilledRegion)
    }

    /// Should the last point connect back to the first one when this drawing is displayed?
    #[inline]
    pub fn renders_closed(&self) -> bool {
        self.finished && matches!(self.kind, DrawingKind::ClosedLoop)
    }
}
