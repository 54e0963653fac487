// MIT/Apache2 License

//! Remapping drawings from a source window into a destination viewport.

use crate::{Drawing, DrawingKind, Error, Point, Rectangle, Result};
use lyon_path::geom::euclid::{Point2D, Transform2D};
use num_traits::AsPrimitive;

/// Coordinates relative to the whole drawing area.
pub enum SourceSpace {}

/// Coordinates relative to the destination viewport's origin.
pub enum ViewportSpace {}

/// Maps points inside of a source rectangle onto a destination rectangle, dropping everything else.
#[derive(Debug, Clone)]
pub struct ViewportMapper {
    source: Rectangle,
    destination: Rectangle,
    origin: Point2D<f64, SourceSpace>,
    scale: Transform2D<f64, SourceSpace, ViewportSpace>,
}

impl ViewportMapper {
    /// Create a new mapper from `source` onto `destination`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRectangle` if either rectangle has no area.
    pub fn new(source: Rectangle, destination: Rectangle) -> Result<Self> {
        if let Some(bad) = [source, destination].iter().find(|r| r.is_degenerate()) {
            return Err(Error::InvalidRectangle(*bad));
        }

        let scale_x = f64::from(destination.width) / f64::from(source.width);
        let scale_y = f64::from(destination.height) / f64::from(source.height);

        Ok(Self {
            source,
            destination,
            origin: Point2D::new(f64::from(source.x), f64::from(source.y)),
            scale: Transform2D::scale(scale_x, scale_y),
        })
    }

    #[inline]
    pub fn source(&self) -> Rectangle {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> Rectangle {
        self.destination
    }

    /// The horizontal and vertical scale factors.
    #[inline]
    pub fn scale(&self) -> (f64, f64) {
        (self.scale.m11, self.scale.m22)
    }

    /// Map a single point, or return `None` if it lies outside of the source rectangle.
    #[inline]
    pub fn map_point(&self, point: Point) -> Option<Point> {
        if !self.source.contains(point) {
            return None;
        }

        // translate into the source's frame first, then scale
        let offset = Point2D::new(f64::from(point.x), f64::from(point.y)) - self.origin;
        let local = self.scale.transform_vector(offset);
        let x: i32 = local.x.as_();
        let y: i32 = local.y.as_();

        Some(Point::new(
            x.saturating_add(self.destination.x),
            y.saturating_add(self.destination.y),
        ))
    }

    /// Map every drawing into the destination viewport.
    ///
    /// Filled regions are skipped. Each run of consecutive points inside the source rectangle becomes its own
    /// finished drawing, so a path that leaves the source and comes back produces two drawings. A closed loop
    /// stays closed only if none of its points were dropped; otherwise its pieces become open paths.
    pub fn map_drawings<'a, I>(&self, drawings: I) -> Vec<Drawing>
    where
        I: IntoIterator<Item = &'a Drawing>,
    {
        let mut mapped = Vec::new();

        for drawing in drawings {
            if drawing.is_region() {
                continue;
            }

            let start = mapped.len();
            let mut run = Vec::new();
            let mut dropped = false;

            for &point in drawing.points() {
                match self.map_point(point) {
                    Some(point) => run.push(point),
                    None => {
                        dropped = true;
                        mapped.extend(Drawing::finished(
                            DrawingKind::OpenPath,
                            std::mem::take(&mut run),
                        ));
                    }
                }
            }

            let kind = if dropped {
                DrawingKind::OpenPath
            } else {
                drawing.kind()
            };
            mapped.extend(Drawing::finished(kind, run));

            log::trace!(
                "Mapped a drawing of {} points into {} pieces",
                drawing.len(),
                mapped.len() - start
            );
        }

        mapped
    }
}
