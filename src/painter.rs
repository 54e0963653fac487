// MIT/Apache2 License

use crate::{
    clip::clip_drawing, fill::ColorSource, ClipWindow, Drawing, DrawingKind, Error, Point,
    RegionGrower, Result,
};
use std::{fmt, mem};

/// Whether or not the `Painter` is in the middle of a drawing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DrawingState {
    /// Every drawing is finished.
    Idle,
    /// The last drawing is still accepting points.
    Active,
}

impl fmt::Display for DrawingState {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrawingState::Idle => "idle",
            DrawingState::Active => "active",
        })
    }
}

/// Owns the collection of drawings and enforces the editing protocol on it.
///
/// Drawings are kept in the order they were made; the last one is drawn on top and is the one `undo` removes.
/// At most one drawing is unfinished at a time, and if there is one it is the last. The painter is `Active`
/// exactly when such a drawing exists.
///
/// Every operation either completes or leaves the painter exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct Painter {
    drawings: Vec<Drawing>,
    brush: Point,
}

impl Painter {
    /// Create a new, empty painter with its brush at the origin.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current drawing state.
    #[inline]
    pub fn state(&self) -> DrawingState {
        match self.drawings.last() {
            Some(drawing) if !drawing.is_finished() => DrawingState::Active,
            _ => DrawingState::Idle,
        }
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.state() == DrawingState::Active
    }

    /// The last known position of the pointer.
    #[inline]
    pub fn brush(&self) -> Point {
        self.brush
    }

    /// Every drawing, oldest first.
    #[inline]
    pub fn drawings(&self) -> &[Drawing] {
        &self.drawings
    }

    /// The drawing currently in progress, if any.
    #[inline]
    pub fn current_drawing(&self) -> Option<&Drawing> {
        self.drawings.last().filter(|d| !d.is_finished())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    /// Start a new closed loop at `point`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if a drawing is already in progress.
    #[inline]
    pub fn start_drawing(&mut self, point: Point) -> Result {
        self.start(DrawingKind::ClosedLoop, point)
    }

    /// Start a new open path at `point`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if a drawing is already in progress.
    #[inline]
    pub fn start_path(&mut self, point: Point) -> Result {
        self.start(DrawingKind::OpenPath, point)
    }

    fn start(&mut self, kind: DrawingKind, point: Point) -> Result {
        self.expect_idle("start a drawing")?;

        log::debug!("Starting a {:?} at ({}, {})", kind, point.x, point.y);
        self.drawings.push(Drawing::new(kind, point));
        Ok(())
    }

    /// Add a point onto the drawing in progress.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no drawing is in progress.
    pub fn add_point(&mut self, point: Point) -> Result {
        let current = self
            .drawings
            .last_mut()
            .filter(|d| !d.is_finished())
            .ok_or_else(|| Error::not_active("add a point"))?;

        log::trace!("Adding ({}, {}) to the current drawing", point.x, point.y);
        current.add_point(point)
    }

    /// Finish the drawing in progress.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no drawing is in progress.
    pub fn stop_drawing(&mut self) -> Result {
        let current = self
            .drawings
            .last_mut()
            .filter(|d| !d.is_finished())
            .ok_or_else(|| Error::not_active("stop drawing"))?;

        current.finish()?;
        log::debug!("Finished a drawing with {} points", current.len());
        Ok(())
    }

    /// Remove the most recent drawing and return it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if a drawing is in progress, or `EmptyCollection` if there is nothing to remove.
    pub fn undo(&mut self) -> Result<Drawing> {
        self.expect_idle("undo")?;

        let removed = self.drawings.pop().ok_or(Error::EmptyCollection)?;
        log::debug!("Undid a {:?}, {} drawings left", removed.kind(), self.len());
        Ok(removed)
    }

    /// Remove every drawing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if a drawing is in progress.
    pub fn clear(&mut self) -> Result {
        self.expect_idle("clear")?;

        log::debug!("Clearing {} drawings", self.len());
        self.drawings.clear();
        Ok(())
    }

    /// Grow a filled region from `seed` over `source` and add it as a new drawing.
    ///
    /// If no seed is given, the brush position is used.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if a drawing is in progress, or `OutOfBounds` if the seed lies outside of the
    /// source.
    pub fn fill<S: ColorSource + ?Sized>(&mut self, seed: Option<Point>, source: &S) -> Result {
        self.expect_idle("fill")?;

        let region = RegionGrower::new(source).grow(seed.unwrap_or(self.brush))?;
        self.drawings.push(region);
        Ok(())
    }

    /// Clip every drawing against `window`, replacing the collection with the results.
    ///
    /// Filled regions are dropped, as are drawings with nothing left inside of the window. Every other
    /// drawing becomes a finished closed loop.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if a drawing is in progress, or `DegenerateGeometry` if clipping hits a
    /// parallel crossing. In both cases the collection is left untouched.
    pub fn clip(&mut self, window: &ClipWindow) -> Result {
        self.expect_idle("clip")?;

        if !window.is_counterclockwise() {
            log::warn!("Clip window is not wound counter-clockwise, results will be wrong");
        }

        let mut clipped = Vec::with_capacity(self.drawings.len());
        for drawing in self.drawings.iter().filter(|d| !d.is_region()) {
            clipped.extend(clip_drawing(drawing, window)?);
        }

        log::debug!(
            "Clipped {} drawings down to {}",
            self.drawings.len(),
            clipped.len()
        );
        self.drawings = clipped;
        Ok(())
    }

    /// Move the brush. This is always allowed.
    #[inline]
    pub fn move_brush(&mut self, point: Point) {
        self.brush = point;
    }

    /// Replace the whole collection with already finished drawings, returning the old collection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if a drawing is in progress or any of the new drawings is unfinished.
    pub fn replace_drawings(&mut self, drawings: Vec<Drawing>) -> Result<Vec<Drawing>> {
        self.expect_idle("replace the drawings")?;

        if drawings.iter().any(|d| !d.is_finished()) {
            return Err(Error::invalid_state(
                "replace the drawings",
                "every new drawing must be finished",
            ));
        }

        log::debug!("Replacing {} drawings with {}", self.len(), drawings.len());
        Ok(mem::replace(&mut self.drawings, drawings))
    }

    #[inline]
    fn expect_idle(&self, operation: &'static str) -> Result {
        match self.state() {
            DrawingState::Idle => Ok(()),
            DrawingState::Active => Err(Error::not_idle(operation)),
        }
    }
}
