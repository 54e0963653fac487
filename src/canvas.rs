// MIT/Apache2 License

use crate::{
    raster::{Bresenham, LineRasterizer},
    surface::path_to_lines,
    Color, ColorSource, Point, Surface,
};
use lyon_path::Path;
use num_traits::AsPrimitive;
use std::convert::TryFrom;

/// An in-memory pixel buffer.
///
/// Rendering onto a canvas and then growing regions over it is how filled regions pick up the shapes that are
/// currently on screen. Pixels are stored row by row, starting at `y = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    stroke: Color,
}

impl Canvas {
    /// Create a new canvas where every pixel is `background`.
    #[inline]
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![background; len],
            stroke: Color::BLACK,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Every pixel, row by row.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// The color of a pixel, or `None` if it lies outside of the canvas.
    #[inline]
    pub fn get(&self, point: Point) -> Option<Color> {
        self.index(point).map(|i| self.pixels[i])
    }

    /// Set a pixel. Points outside of the canvas are ignored.
    #[inline]
    pub fn put(&mut self, point: Point, color: Color) {
        if let Some(i) = self.index(point) {
            self.pixels[i] = color;
        }
    }

    /// Set every pixel to one color.
    #[inline]
    pub fn fill_with(&mut self, color: Color) {
        self.pixels.iter_mut().for_each(|p| *p = color);
    }

    /// The pixels as bytes, in RGBA order.
    #[inline]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }

    #[inline]
    fn index(&self, point: Point) -> Option<usize> {
        let x = u32::try_from(point.x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(point.y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl ColorSource for Canvas {
    #[inline]
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn sample(&self, point: Point) -> Color {
        self.get(point).unwrap_or(Color::TRANSPARENT)
    }
}

impl Surface for Canvas {
    #[inline]
    fn set_stroke(&mut self, color: Color) -> crate::Result {
        self.stroke = color;
        Ok(())
    }

    #[inline]
    fn plot(&mut self, points: &[Point]) -> crate::Result {
        let stroke = self.stroke;
        points.iter().for_each(|&p| self.put(p, stroke));
        Ok(())
    }

    fn stroke_path(&mut self, path: &Path) -> crate::Result {
        let round = |x: f32| -> i32 { x.round().as_() };
        let mut pixels = Vec::new();

        for line in path_to_lines(path.iter()) {
            Bresenham.line(
                Point::new(round(line.from.x), round(line.from.y)),
                Point::new(round(line.to.x), round(line.to.y)),
                &mut pixels,
            );
        }

        self.plot(&pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::path_from_points;

    #[test]
    fn test_plot_clips_silently() {
        let mut canvas = Canvas::new(3, 2, Color::WHITE);
        canvas.set_stroke(Color::RED).unwrap();
        canvas
            .plot(&[
                Point::new(-1, 0),
                Point::new(1, 1),
                Point::new(3, 0),
                Point::new(0, 2),
            ])
            .unwrap();

        assert_eq!(canvas.get(Point::new(1, 1)), Some(Color::RED));
        assert_eq!(canvas.get(Point::new(3, 0)), None);
        assert_eq!(
            canvas.pixels().iter().filter(|&&c| c == Color::RED).count(),
            1
        );
    }

    #[test]
    fn test_stroke_closed_path() {
        let mut canvas = Canvas::new(8, 8, Color::WHITE);
        let path = path_from_points(
            &[
                Point::new(1, 1),
                Point::new(5, 1),
                Point::new(5, 5),
                Point::new(1, 5),
            ],
            true,
        )
        .unwrap();
        canvas.stroke_path(&path).unwrap();

        // the outline of a 5x5 square
        let black = canvas.pixels().iter().filter(|&&c| c == Color::BLACK).count();
        assert_eq!(black, 16);
        assert_eq!(canvas.get(Point::new(1, 3)), Some(Color::BLACK));
        assert_eq!(canvas.get(Point::new(3, 3)), Some(Color::WHITE));
    }

    #[test]
    fn test_rgba_bytes() {
        let mut canvas = Canvas::new(2, 1, Color::TRANSPARENT);
        canvas.put(Point::new(1, 0), Color::opaque(1, 2, 3));
        assert_eq!(canvas.to_rgba_bytes(), vec![0, 0, 0, 0, 1, 2, 3, 255]);

        canvas.fill_with(Color::WHITE);
        assert_eq!(canvas.sample(Point::new(0, 0)), Color::WHITE);
    }
}
