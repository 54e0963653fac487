// MIT/Apache2 License

use crate::{Line, Point, Rectangle};
use std::fmt;

/// Sum error type for sketchpad operations.
///
/// Every variant is a broken caller contract. None of them are retried internally; whoever drives the
/// `Painter` decides whether to surface them or drop the event that caused them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation is not legal in the current state.
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// What was wrong with the state.
        reason: &'static str,
    },
    /// Attempted to remove a drawing from an empty collection.
    EmptyCollection,
    /// A clip edge and a subject edge were parallel where they were expected to cross.
    DegenerateGeometry {
        /// The edge of the shape being clipped.
        subject: Line,
        /// The edge of the clip window.
        edge: Line,
    },
    /// A rectangle with no area was used for viewport mapping.
    InvalidRectangle(Rectangle),
    /// A point outside of the pixel grid was sampled.
    OutOfBounds {
        /// The offending point.
        point: Point,
        /// Width of the grid.
        width: u32,
        /// Height of the grid.
        height: u32,
    },
}

impl Error {
    #[inline]
    pub(crate) fn invalid_state(operation: &'static str, reason: &'static str) -> Self {
        Self::InvalidState { operation, reason }
    }

    #[inline]
    pub(crate) fn not_idle(operation: &'static str) -> Self {
        Self::invalid_state(operation, "a drawing is in progress")
    }

    #[inline]
    pub(crate) fn not_active(operation: &'static str) -> Self {
        Self::invalid_state(operation, "no drawing is in progress")
    }

    /// Is this an `InvalidState` error?
    #[inline]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState { operation, reason } => {
                write!(f, "Cannot {}: {}", operation, reason)
            }
            Self::EmptyCollection => f.write_str("There are no drawings to remove"),
            Self::DegenerateGeometry { subject, edge } => write!(
                f,
                "Edge ({}, {})-({}, {}) is parallel to clip edge ({}, {})-({}, {})",
                subject.x1, subject.y1, subject.x2, subject.y2, edge.x1, edge.y1, edge.x2, edge.y2,
            ),
            Self::InvalidRectangle(r) => write!(
                f,
                "Rectangle at ({}, {}) with size {}x{} has no area",
                r.x, r.y, r.width, r.height
            ),
            Self::OutOfBounds {
                point,
                width,
                height,
            } => write!(
                f,
                "Point ({}, {}) is outside of the {}x{} pixel grid",
                point.x, point.y, width, height
            ),
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
