// MIT/Apache2 License

use crate::{
    render, render_outline, Canvas, ClipWindow, Color, KeyBindings, Painter, Point, RenderConfig, Result,
    SketchConfig, Surface, ViewportMapper,
};

/// A pointer button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Button {
    Primary,
    Secondary,
}

/// An input event delivered by whatever hosts the sketchpad.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InputEvent {
    PointerDown(Button, Point),
    PointerUp(Button, Point),
    PointerMove(Point),
    Key(char),
}

/// Translates input events into painter operations.
///
/// Besides the main painter, the controller keeps a second painter holding the clipped drawings as seen
/// through the viewport. It is refreshed every time the main painter is clipped, and drawings removed from the
/// main painter by `undo` or `clear` disappear from the viewport as well.
#[derive(Debug, Clone)]
pub struct Controller {
    painter: Painter,
    viewport: Painter,
    // how many of the main painter's drawings the viewport reflects
    mapped: usize,
    clip_window: ClipWindow,
    mapper: ViewportMapper,
    bindings: KeyBindings,
    render: RenderConfig,
    width: u32,
    height: u32,
}

impl Controller {
    /// Set up a controller from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRectangle` if either viewport rectangle has no area.
    pub fn new(config: &SketchConfig) -> Result<Self> {
        Ok(Self {
            painter: Painter::new(),
            viewport: Painter::new(),
            mapped: 0,
            clip_window: config.clip_window.clone(),
            mapper: ViewportMapper::new(config.viewport_source, config.viewport_destination)?,
            bindings: config.bindings,
            render: config.render,
            width: config.width,
            height: config.height,
        })
    }

    /// The main painter.
    #[inline]
    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    /// The painter holding what the viewport shows.
    #[inline]
    pub fn viewport(&self) -> &Painter {
        &self.viewport
    }

    #[inline]
    pub fn clip_window(&self) -> &ClipWindow {
        &self.clip_window
    }

    #[inline]
    pub fn mapper(&self) -> &ViewportMapper {
        &self.mapper
    }

    /// Handle one input event.
    ///
    /// Returns `true` if the event caused a painter operation and `false` if it was ignored.
    ///
    /// # Errors
    ///
    /// Errors from the painter are passed through untouched. The painter is left as it was before the event.
    pub fn handle(&mut self, event: InputEvent) -> Result<bool> {
        log::trace!("Handling {:?}", event);

        let drawing = self.painter.is_drawing();
        match event {
            InputEvent::PointerUp(Button::Primary, p) if !drawing => self.painter.start_drawing(p)?,
            InputEvent::PointerDown(Button::Primary, p) if drawing => self.painter.add_point(p)?,
            InputEvent::PointerUp(Button::Secondary, _) if drawing => self.painter.stop_drawing()?,
            InputEvent::PointerMove(p) => self.painter.move_brush(p),
            InputEvent::Key(key) if key == self.bindings.undo => {
                self.painter.undo()?;
                if self.mapped > self.painter.len() {
                    self.mapped = self.painter.len();
                    self.refresh_viewport()?;
                }
            }
            InputEvent::Key(key) if key == self.bindings.clip => self.clip()?,
            InputEvent::Key(key) if key == self.bindings.fill => self.fill()?,
            InputEvent::Key(key) if key == self.bindings.clear => {
                self.painter.clear()?;
                self.mapped = 0;
                self.refresh_viewport()?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }

    /// Render the clip window outline, then the main painter, then the viewport painter.
    ///
    /// # Errors
    ///
    /// Errors from the surface are passed through.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result {
        render_outline(&self.clip_window, surface, &self.render)?;
        render(&self.painter, surface, &self.render)?;
        render(&self.viewport, surface, &self.render)
    }

    /// Render what is on screen into a fresh canvas.
    pub fn snapshot(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.width, self.height, Color::WHITE);
        self.render(&mut canvas)?;
        Ok(canvas)
    }

    fn clip(&mut self) -> Result {
        self.painter.clip(&self.clip_window)?;
        self.mapped = self.painter.len();
        self.refresh_viewport()
    }

    fn refresh_viewport(&mut self) -> Result {
        let mapped = self
            .mapper
            .map_drawings(&self.painter.drawings()[..self.mapped]);
        self.viewport.replace_drawings(mapped)?;
        Ok(())
    }

    fn fill(&mut self) -> Result {
        let canvas = self.snapshot()?;
        self.painter.fill(None, &canvas)
    }
}
