//! Interactive Mandelbrot set explorer.
//!
//! The core is three layered pieces: the escape-time evaluator, the palette
//! colour mapping, and the pan/zoom viewport. A frame-based explorer loop
//! drives them behind two external collaborator ports, a display surface
//! and an input source; the optional `gui` feature provides winit/pixels
//! implementations of both.

mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::controllers::events::InputEvent;
pub use crate::controllers::explorer::{
    Explorer, ExplorerConfigError, ExplorerError, ExplorerStatus,
};
pub use crate::controllers::ports::display_surface::DisplaySurface;
pub use crate::controllers::ports::input_source::InputSource;
pub use crate::controllers::viewport::ViewportController;
pub use crate::core::actions::render_frame::{RenderFrameError, pixel_colour, render_frame};
pub use crate::core::actions::render_frame_parallel::render_frame_parallel;
pub use crate::core::colour_mapping::colour_map::{ColourMap, ColourMapKind};
pub use crate::core::colour_mapping::errors::ColourMapError;
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_point::PixelPoint;
pub use crate::core::data::plane_point::PlanePoint;
pub use crate::core::data::viewport::{PanDirection, Viewport, ViewportError};
pub use crate::core::escape_time::evaluate;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::presenter::PixelsDisplaySurface;
