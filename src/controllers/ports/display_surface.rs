use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;

/// External collaborator that presents a rendered frame.
///
/// The frame is borrowed read-only for the duration of the call; ownership
/// stays with the render loop.
pub trait DisplaySurface {
    type Failure: Error;

    fn screen_width(&self) -> u32;

    fn screen_height(&self) -> u32;

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Self::Failure>;
}
