// MIT/Apache2 License

use crate::{ClipWindow, Color, LineStrategy, Rectangle};

/// How a `Painter` is drawn onto a `Surface`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// How paths and loops are turned into pixels.
    pub strategy: LineStrategy,
    /// The color of paths and loops.
    pub stroke: Color,
    /// The color of filled regions.
    pub fill: Color,
    /// The color of the clip window outline.
    pub outline: Color,
    /// Draw a segment from the drawing in progress to the brush?
    pub brush_preview: bool,
}

impl Default for RenderConfig {
    #[inline]
    fn default() -> Self {
        Self {
            strategy: LineStrategy::default(),
            stroke: Color::BLACK,
            fill: Color::RED,
            outline: Color::BLUE,
            brush_preview: true,
        }
    }
}

/// The keys that trigger painter operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct KeyBindings {
    pub undo: char,
    pub clip: char,
    pub fill: char,
    pub clear: char,
}

impl Default for KeyBindings {
    #[inline]
    fn default() -> Self {
        Self {
            undo: 'u',
            clip: 'c',
            fill: 'f',
            clear: 'x',
        }
    }
}

/// Everything needed to set up a sketching session.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// Width of the drawing area, in pixels.
    pub width: u32,
    /// Height of the drawing area, in pixels.
    pub height: u32,
    /// The convex window drawings are clipped against.
    pub clip_window: ClipWindow,
    /// The part of the drawing area shown in the viewport.
    pub viewport_source: Rectangle,
    /// Where the viewport is shown.
    pub viewport_destination: Rectangle,
    pub bindings: KeyBindings,
    pub render: RenderConfig,
}

impl Default for SketchConfig {
    #[inline]
    fn default() -> Self {
        const WINDOW: Rectangle = Rectangle::new(150, 150, 250, 250);

        Self {
            width: 640,
            height: 480,
            clip_window: ClipWindow::from_rectangle(WINDOW),
            viewport_source: WINDOW,
            viewport_destination: Rectangle::new(440, 20, 180, 180),
            bindings: KeyBindings::default(),
            render: RenderConfig::default(),
        }
    }
}
