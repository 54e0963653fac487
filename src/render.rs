// MIT/Apache2 License

use crate::{
    raster::rasterize_polyline, surface::path_from_points, ClipWindow, Drawing, LineStrategy, Painter, Point,
    RenderConfig, Surface,
};

/// Draw everything a `Painter` holds onto a surface, then flush it.
///
/// Filled regions are plotted as separate dots in the fill color. Paths and loops are stroked in the stroke
/// color, with loops only connecting back to their start once finished. While a drawing is in progress, a
/// segment from its last point to the brush is drawn as well, if enabled.
pub fn render<S: Surface + ?Sized>(
    painter: &Painter,
    surface: &mut S,
    config: &RenderConfig,
) -> crate::Result {
    for drawing in painter.drawings() {
        render_drawing(drawing, surface, config)?;
    }

    if config.brush_preview {
        if let Some(current) = painter.current_drawing() {
            surface.set_stroke(config.stroke)?;
            stroke_polyline(
                surface,
                &[current.last_point(), painter.brush()],
                false,
                config.strategy,
            )?;
        }
    }

    surface.flush()
}

/// Draw a single drawing onto a surface.
pub fn render_drawing<S: Surface + ?Sized>(
    drawing: &Drawing,
    surface: &mut S,
    config: &RenderConfig,
) -> crate::Result {
    if drawing.is_region() {
        surface.set_stroke(config.fill)?;
        surface.plot(drawing.points())
    } else {
        surface.set_stroke(config.stroke)?;
        stroke_polyline(
            surface,
            drawing.points(),
            drawing.renders_closed(),
            config.strategy,
        )
    }
}

/// Draw the outline of a clip window in the outline color.
pub fn render_outline<S: Surface + ?Sized>(
    window: &ClipWindow,
    surface: &mut S,
    config: &RenderConfig,
) -> crate::Result {
    surface.set_stroke(config.outline)?;
    stroke_polyline(surface, window.vertices(), true, config.strategy)
}

fn stroke_polyline<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    closed: bool,
    strategy: LineStrategy,
) -> crate::Result {
    match (strategy.rasterizer(), points) {
        // a lone point has no lines for the surface to stroke
        (_, [_]) => surface.plot(points),
        (Some(rasterizer), _) => surface.plot(&rasterize_polyline(rasterizer, points, closed)),
        (None, _) => match path_from_points(points, closed) {
            Some(path) => surface.stroke_path(&path),
            None => Ok(()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Error};
    use lyon_path::Path;

    /// Records what was drawn instead of drawing it.
    #[derive(Default)]
    struct Recorder {
        stroke: Vec<Color>,
        plotted: Vec<Vec<Point>>,
        paths: usize,
        flushed: bool,
    }

    impl Surface for Recorder {
        fn set_stroke(&mut self, color: Color) -> crate::Result {
            self.stroke.push(color);
            Ok(())
        }

        fn plot(&mut self, points: &[Point]) -> crate::Result {
            self.plotted.push(points.to_vec());
            Ok(())
        }

        fn stroke_path(&mut self, _path: &Path) -> crate::Result {
            self.paths += 1;
            Ok(())
        }

        fn flush(&mut self) -> crate::Result {
            self.flushed = true;
            Ok(())
        }
    }

    fn painter_with_preview() -> Painter {
        let mut painter = Painter::new();
        painter.start_drawing(Point::new(0, 0)).unwrap();
        painter.add_point(Point::new(4, 0)).unwrap();
        painter.move_brush(Point::new(4, 2));
        painter
    }

    #[test]
    fn test_direct_strip() {
        let mut painter = Painter::new();
        painter.start_drawing(Point::new(0, 0)).unwrap();
        painter.add_point(Point::new(4, 0)).unwrap();
        painter.add_point(Point::new(4, 4)).unwrap();
        painter.stop_drawing().unwrap();

        let region = Drawing::finished(
            crate::DrawingKind::FilledRegion,
            vec![Point::new(1, 1), Point::new(1, 2)],
        )
        .unwrap();
        let mut drawings = painter.drawings().to_vec();
        drawings.push(region);
        painter.replace_drawings(drawings).unwrap();

        let config = RenderConfig {
            strategy: LineStrategy::DirectStrip,
            ..RenderConfig::default()
        };
        let mut recorder = Recorder::default();
        render(&painter, &mut recorder, &config).unwrap();

        assert_eq!(recorder.paths, 1);
        assert_eq!(
            recorder.plotted,
            vec![vec![Point::new(1, 1), Point::new(1, 2)]]
        );
        assert_eq!(recorder.stroke, vec![config.stroke, config.fill]);
        assert!(recorder.flushed);
    }

    #[test]
    fn test_brush_preview() {
        let painter = painter_with_preview();
        let mut recorder = Recorder::default();
        render(&painter, &mut recorder, &RenderConfig::default()).unwrap();

        // the unfinished loop stays open, then the preview runs to the brush
        assert_eq!(recorder.plotted.len(), 2);
        assert_eq!(recorder.plotted[0].len(), 5);
        assert_eq!(
            recorder.plotted[1],
            vec![Point::new(4, 0), Point::new(4, 1), Point::new(4, 2)]
        );

        let mut recorder = Recorder::default();
        let config = RenderConfig {
            brush_preview: false,
            ..RenderConfig::default()
        };
        render(&painter, &mut recorder, &config).unwrap();
        assert_eq!(recorder.plotted.len(), 1);
    }

    #[test]
    fn test_outline() {
        let window = ClipWindow::from_rectangle(crate::Rectangle::new(0, 0, 2, 2));
        let config = RenderConfig::default();
        let mut recorder = Recorder::default();
        render_outline(&window, &mut recorder, &config).unwrap();

        assert_eq!(recorder.stroke, vec![config.outline]);
        assert_eq!(
            recorder.plotted,
            vec![vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
                Point::new(1, 2),
                Point::new(0, 2),
                Point::new(0, 1)
            ]]
        );
    }

    #[test]
    fn test_errors_propagate() {
        struct Broken;

        impl Surface for Broken {
            fn set_stroke(&mut self, _color: Color) -> crate::Result {
                Err(Error::invalid_state("set the stroke", "the surface is gone"))
            }

            fn plot(&mut self, _points: &[Point]) -> crate::Result {
                Ok(())
            }

            fn stroke_path(&mut self, _path: &Path) -> crate::Result {
                Ok(())
            }
        }

        let painter = painter_with_preview();
        assert!(render(&painter, &mut Broken, &RenderConfig::default())
            .unwrap_err()
            .is_invalid_state());
    }
}
