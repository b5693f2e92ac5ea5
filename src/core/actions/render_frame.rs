use crate::core::colour_mapping::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::viewport::Viewport;
use crate::core::escape_time::evaluate;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderFrameError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// The per-pixel mapping the whole frame is built from.
pub fn pixel_colour(
    viewport: &Viewport,
    pixel: PixelPoint,
    max_iterations: u32,
    colour_map: &dyn ColourMap,
) -> Result<Colour, ColourMapError> {
    colour_map.map(evaluate(viewport.plane_point(pixel), max_iterations))
}

pub(crate) fn render_row(
    viewport: &Viewport,
    y: u32,
    max_iterations: u32,
    colour_map: &dyn ColourMap,
) -> Result<Vec<u8>, RenderFrameError> {
    let mut row = Vec::with_capacity(viewport.width() as usize * 3);

    for x in 0..viewport.width() {
        let colour = pixel_colour(viewport, PixelPoint { x, y }, max_iterations, colour_map)
            .map_err(RenderFrameError::ColourMap)?;
        row.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Ok(row)
}

/// Renders the viewport into a fresh pixel buffer, one row at a time.
pub fn render_frame(
    viewport: &Viewport,
    max_iterations: u32,
    colour_map: &dyn ColourMap,
) -> Result<PixelBuffer, RenderFrameError> {
    let rows: Result<Vec<Vec<u8>>, RenderFrameError> = (0..viewport.height())
        .map(|y| render_row(viewport, y, max_iterations, colour_map))
        .collect();

    PixelBuffer::from_data(viewport.width(), viewport.height(), rows?.concat())
        .map_err(RenderFrameError::PixelBuffer)
}
