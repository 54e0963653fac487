// MIT/Apache2 License

//! Seeded region growing over a pixel grid.

use crate::{Color, Drawing, DrawingKind, Error, Point, Result};
use std::collections::{HashSet, VecDeque};

const NEIGHBORS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
];

/// Offset a point, or `None` if that would leave the integer grid.
#[inline]
fn step(point: Point, offset: Point) -> Option<Point> {
    Some(Point::new(
        point.x.checked_add(offset.x)?,
        point.y.checked_add(offset.y)?,
    ))
}

/// A read-only grid of pixel colors.
///
/// The contents must not change while a region is being grown over it.
pub trait ColorSource {
    /// The width and height of the grid. Valid points lie in `[0, width) x [0, height)`.
    fn size(&self) -> (u32, u32);

    /// Get the color of a pixel.
    ///
    /// This is only ever called with points inside the grid.
    fn sample(&self, point: Point) -> Color;

    /// Tell if a point lies inside the grid.
    #[inline]
    fn in_bounds(&self, point: Point) -> bool {
        let (width, height) = self.size();
        point.x >= 0
            && point.y >= 0
            && i64::from(point.x) < i64::from(width)
            && i64::from(point.y) < i64::from(height)
    }
}

impl<S: ColorSource + ?Sized> ColorSource for &S {
    #[inline]
    fn size(&self) -> (u32, u32) {
        S::size(self)
    }

    #[inline]
    fn sample(&self, point: Point) -> Color {
        S::sample(self, point)
    }
}

/// Collects the 4-connected set of pixels that share the color of a seed pixel.
pub struct RegionGrower<'src, S: ColorSource + ?Sized> {
    source: &'src S,
}

impl<'src, S: ColorSource + ?Sized> RegionGrower<'src, S> {
    /// Create a new `RegionGrower` over a pixel source.
    #[inline]
    pub fn new(source: &'src S) -> Self {
        Self { source }
    }

    /// Grow a region from `seed`, collecting every reachable pixel with exactly the seed's color.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the seed lies outside of the grid.
    #[inline]
    pub fn grow(&self, seed: Point) -> Result<Drawing> {
        self.grow_by(seed, |base, color| base == color)
    }

    /// Grow a region from `seed`, using `matches(seed_color, pixel_color)` to decide if a pixel belongs to
    /// the region.
    ///
    /// The seed's color is sampled once, before the traversal starts. Points are collected in
    /// breadth-first order and each point appears exactly once.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the seed lies outside of the grid.
    pub fn grow_by<F>(&self, seed: Point, mut matches: F) -> Result<Drawing>
    where
        F: FnMut(Color, Color) -> bool,
    {
        if !self.source.in_bounds(seed) {
            let (width, height) = self.source.size();
            return Err(Error::OutOfBounds {
                point: seed,
                width,
                height,
            });
        }

        let base = self.source.sample(seed);
        let mut region = Drawing::new(DrawingKind::FilledRegion, seed);
        let mut to_visit = VecDeque::new();
        let mut seen = HashSet::new();

        seen.insert(seed);
        to_visit.push_back(seed);

        // points leave the queue in the order they entered it, so adding them on entry keeps BFS order
        while let Some(point) = to_visit.pop_front() {
            for neighbor in NEIGHBORS.iter().filter_map(|&offset| step(point, offset)) {
                if !self.source.in_bounds(neighbor) || seen.contains(&neighbor) {
                    continue;
                }

                if matches(base, self.source.sample(neighbor)) {
                    seen.insert(neighbor);
                    to_visit.push_back(neighbor);
                    region.add_point(neighbor)?;
                }
            }
        }

        log::debug!(
            "Grew a region of {} pixels from ({}, {})",
            region.len(),
            seed.x,
            seed.y
        );

        region.finish()?;
        Ok(region)
    }
}
