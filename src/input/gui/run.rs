use crate::controllers::events::InputEvent;
use crate::controllers::explorer::{Explorer, ExplorerStatus};
use crate::controllers::ports::display_surface::DisplaySurface;
use crate::core::colour_mapping::colour_map::ColourMapKind;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::viewport::Viewport;
use crate::input::gui::events::{input_event_for_click, input_event_for_key};
use crate::presenters::pixels::presenter::PixelsDisplaySurface;
use log::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

const INITIAL_WIDTH: f64 = 1000.0;
const INITIAL_HEIGHT: f64 = 600.0;

fn dispatch(
    explorer: &mut Explorer,
    input: InputEvent,
    window: &Window,
    target: &EventLoopWindowTarget<()>,
) {
    match explorer.handle_event(input) {
        ExplorerStatus::Quit => target.exit(),
        ExplorerStatus::Continue => window.request_redraw(),
    }
}

/// Opens the explorer window and blocks on the event loop until quit.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let size = window.inner_size();
    let mut display =
        PixelsDisplaySurface::new(window).expect("Failed to create pixel surface");
    let viewport =
        Viewport::classic(size.width, size.height).expect("initial window size is non-zero");
    let mut explorer = Explorer::with_defaults(viewport, ColourMapKind::default());
    let mut cursor = PixelPoint { x: 0, y: 0 };

    info!("window opened at {}x{}", size.width, size.height);

    event_loop
        .run(move |event, target| {
            target.set_control_flow(ControlFlow::Wait);

            let Event::WindowEvent { event, .. } = event else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => {
                    dispatch(&mut explorer, InputEvent::Quit, window, target);
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if key_event.state != ElementState::Pressed {
                        return;
                    }

                    let PhysicalKey::Code(code) = key_event.physical_key else {
                        return;
                    };

                    if let Some(input) = input_event_for_key(code) {
                        dispatch(&mut explorer, input, window, target);
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = PixelPoint {
                        x: position.x.max(0.0) as u32,
                        y: position.y.max(0.0) as u32,
                    };
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button,
                    ..
                } => {
                    if let Some(input) = input_event_for_click(button, cursor) {
                        dispatch(&mut explorer, input, window, target);
                    }
                }
                WindowEvent::Resized(new_size) => {
                    if new_size.width == 0 || new_size.height == 0 {
                        // minimised; keep the previous view until restored
                        return;
                    }

                    display.resize(new_size.width, new_size.height);
                    if let Err(err) = explorer.resize(new_size.width, new_size.height) {
                        error!("resize rejected: {}", err);
                        return;
                    }
                    window.request_redraw();
                }
                WindowEvent::RedrawRequested => match explorer.render_if_dirty() {
                    Ok(Some(frame)) => {
                        if let Err(err) = display.present(&frame) {
                            error!("present failed: {}", err);
                            target.exit();
                        }
                    }
                    Ok(None) => {
                        if let Err(err) = display.redraw() {
                            error!("redraw failed: {}", err);
                            target.exit();
                        }
                    }
                    Err(err) => {
                        error!("render failed: {}", err);
                        target.exit();
                    }
                },
                _ => {}
            }
        })
        .expect("event loop terminated abnormally");
}
