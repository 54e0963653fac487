// MIT/Apache2 License

//! Sutherland-Hodgman polygon clipping against a convex window.

use crate::{twice::Twice, ClipWindow, Drawing, DrawingKind, Error, Line, Point, Result};
use std::mem;

/// Clip a polygon, given as its loop of vertices, against a convex clip window.
///
/// Both the subject and the window are assumed to be wound counter-clockwise. A clockwise subject yields the
/// complement or nothing at all; this is not checked. The result is empty if the two do not overlap.
///
/// # Errors
///
/// Returns `DegenerateGeometry` if an edge of the subject is parallel to a clip edge at the point where the
/// two were expected to cross.
pub fn clip_polygon(subject: &[Point], window: &ClipWindow) -> Result<Vec<Point>> {
    let mut output = subject.to_vec();

    for edge in window.edges() {
        let input = mem::take(&mut output);

        // the subject was clipped away entirely
        let mut last = match input.last() {
            Some(last) => *last,
            None => break,
        };

        for &point in &input {
            output.extend(clip_vertex(edge, last, point)?);
            last = point;
        }
    }

    Ok(output)
}

/// Clip a drawing against a convex clip window, producing a finished closed loop.
///
/// Returns `None` if nothing of the drawing is left after clipping.
///
/// # Errors
///
/// See `clip_polygon`.
pub fn clip_drawing(drawing: &Drawing, window: &ClipWindow) -> Result<Option<Drawing>> {
    debug_assert!(!drawing.is_region(), "regions are not polygons");

    let points = clip_polygon(drawing.points(), window)?;
    Ok(Drawing::finished(DrawingKind::ClosedLoop, points))
}

/// Figure out which points a single subject vertex contributes when clipping against one edge.
#[inline]
fn clip_vertex(edge: Line, last: Point, point: Point) -> Result<Twice<Point>> {
    match (edge.keeps(point), edge.keeps(last)) {
        // inside -> inside
        (true, true) => Ok(Twice::one(point)),
        // outside -> inside
        (true, false) => Ok(Twice::two(crossing(edge, point, last)?, point)),
        // inside -> outside
        (false, true) => Ok(Twice::one(crossing(edge, point, last)?)),
        (false, false) => Ok(Twice::empty()),
    }
}

#[inline]
fn crossing(edge: Line, point: Point, last: Point) -> Result<Point> {
    let subject = Line::from_points(point, last);
    subject
        .intersection(edge)
        .ok_or(Error::DegenerateGeometry { subject, edge })
}
