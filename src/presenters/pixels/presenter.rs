use crate::controllers::ports::display_surface::DisplaySurface;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::warn;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Display surface backed by a `pixels` framebuffer on a winit window.
pub struct PixelsDisplaySurface {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsDisplaySurface {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
        self.pixels
            .resize_buffer(width, height)
            .expect("Failed to resize buffer");

        self.width = width;
        self.height = height;
    }

    /// Re-presents whatever the framebuffer currently holds, for OS-driven
    /// redraws where nothing was recomputed.
    pub fn redraw(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    fn copy_rgb_frame(&mut self, frame: &PixelBuffer) {
        let dst = self.pixels.frame_mut();

        for (src_pixel, dst_pixel) in frame
            .buffer()
            .chunks_exact(3)
            .zip(dst.chunks_exact_mut(4))
        {
            dst_pixel[0..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }
    }
}

impl DisplaySurface for PixelsDisplaySurface {
    type Failure = pixels::Error;

    fn screen_width(&self) -> u32 {
        self.width
    }

    fn screen_height(&self) -> u32 {
        self.height
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), pixels::Error> {
        if frame.width() != self.width || frame.height() != self.height {
            // stale frame from before a resize; the next render replaces it
            warn!(
                "dropping {}x{} frame for a {}x{} surface",
                frame.width(),
                frame.height(),
                self.width,
                self.height
            );
            return Ok(());
        }

        self.copy_rgb_frame(frame);
        self.pixels.render()
    }
}
