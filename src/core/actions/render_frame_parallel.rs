use rayon::prelude::*;

use crate::core::actions::render_frame::{RenderFrameError, render_row};
use crate::core::colour_mapping::colour_map::ColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;

/// Renders the viewport with rows fanned out across rayon's worker pool.
///
/// Each row is an independent pure computation; rows are reassembled in
/// row-major order, so the output is byte-identical to [`render_frame`]
/// regardless of scheduling.
///
/// [`render_frame`]: crate::core::actions::render_frame::render_frame
pub fn render_frame_parallel(
    viewport: &Viewport,
    max_iterations: u32,
    colour_map: &dyn ColourMap,
) -> Result<PixelBuffer, RenderFrameError> {
    let rows: Result<Vec<Vec<u8>>, RenderFrameError> = (0..viewport.height())
        .into_par_iter()
        .map(|y| render_row(viewport, y, max_iterations, colour_map))
        .collect();

    PixelBuffer::from_data(viewport.width(), viewport.height(), rows?.concat())
        .map_err(RenderFrameError::PixelBuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::render_frame;
    use crate::core::colour_mapping::colour_map::ColourMapKind;
    use crate::core::colour_mapping::factory::colour_map_factory;
    use crate::core::data::plane_point::PlanePoint;

    #[test]
    fn test_parallel_render_matches_sequential_byte_for_byte() {
        let viewport = Viewport::new(PlanePoint { re: -0.7, im: 0.0 }, 0.05, 64, 48).unwrap();

        for &kind in ColourMapKind::ALL {
            let max_iterations = kind.default_max_iterations();
            let colour_map = colour_map_factory(kind, max_iterations);

            let sequential = render_frame(&viewport, max_iterations, colour_map.as_ref()).unwrap();
            let parallel =
                render_frame_parallel(&viewport, max_iterations, colour_map.as_ref()).unwrap();

            assert_eq!(sequential, parallel);
        }
    }

    #[test]
    fn test_parallel_render_of_a_single_row() {
        let viewport = Viewport::new(PlanePoint { re: 0.0, im: 0.0 }, 0.01, 16, 1).unwrap();
        let colour_map = colour_map_factory(ColourMapKind::BandedGradient, 127);

        let frame = render_frame_parallel(&viewport, 127, colour_map.as_ref()).unwrap();

        assert_eq!(frame.height(), 1);
        assert_eq!(frame.buffer_size(), 16 * 3);
    }
}
