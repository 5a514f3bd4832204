//! Interactive Mandelbrot viewer: hold the primary button to glide and zoom
//! toward the pointer, the secondary button to back away.
//!
//! All arithmetic is plain `f64`; zooming past double-precision pixel
//! resolution produces visible banding artifacts rather than an error.

mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::drag::controller::DragController;
pub use crate::controllers::drag::events::{PointerButton, PointerEvent};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::render::render_frame::render_viewport;
pub use crate::input::gui::app::run_gui;
