use mandelbrot_explorer::{ColourMapKind, Viewport, colour_map_factory, render_frame_parallel};
use std::time::{Duration, Instant};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

fn render_once(
    width: u32,
    height: u32,
    kind: ColourMapKind,
) -> Result<Duration, Box<dyn std::error::Error>> {
    let viewport = Viewport::classic(width, height)?;
    let max_iterations = kind.default_max_iterations();
    let colour_map = colour_map_factory(kind, max_iterations);

    let start = Instant::now();
    render_frame_parallel(&viewport, max_iterations, colour_map.as_ref())?;
    Ok(start.elapsed())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let kind = ColourMapKind::default();

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", WIDTH, HEIGHT);
    println!("Palette: {}", kind.display_name());
    println!("Max iterations: {}", kind.default_max_iterations());

    let duration = render_once(WIDTH, HEIGHT, kind)?;
    println!("Duration:   {:?}", duration);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_once_returns_ok() {
        for &kind in ColourMapKind::ALL {
            assert!(render_once(16, 12, kind).is_ok());
        }
    }
}
