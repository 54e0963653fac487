// MIT/Apache2 License

//! A small 2D sketching core. Drawings are authored point by point through a `Painter`, which can clip them
//! against a convex window, grow filled regions from a seed pixel, and hand them off to a `Surface` for
//! display, optionally remapped into a second viewport.
//!
//! Everything lives on the integer pixel grid.

#![forbid(unsafe_code)]

mod error;
mod twice;

pub mod canvas;
pub mod clip;
pub mod color;
pub mod config;
pub mod controller;
pub mod drawing;
pub mod fill;
pub mod painter;
pub mod raster;
pub mod render;
pub mod surface;
pub mod viewport;

pub use canvas::*;
pub use clip::*;
pub use color::*;
pub use config::*;
pub use controller::*;
pub use drawing::*;
pub use error::*;
pub use fill::*;
pub use painter::*;
pub use raster::*;
pub use render::*;
pub use surface::*;
pub use viewport::*;

#[doc(inline)]
pub use sketchpad_geometry::{polyline, ClipWindow, Line, Orientation, Point, Rectangle};

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
