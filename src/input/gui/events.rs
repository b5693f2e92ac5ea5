use crate::controllers::events::InputEvent;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::viewport::PanDirection;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Translates a pressed key into a domain input event.
///
/// `=`/`-` zoom about the centre, WASD and the arrow keys pan, Escape
/// quits. Everything else is ignored.
#[must_use]
pub fn input_event_for_key(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Escape => Some(InputEvent::Quit),
        KeyCode::Equal => Some(InputEvent::ZoomIn),
        KeyCode::Minus => Some(InputEvent::ZoomOut),
        KeyCode::KeyW | KeyCode::ArrowUp => Some(InputEvent::Pan(PanDirection::Up)),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(InputEvent::Pan(PanDirection::Down)),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(InputEvent::Pan(PanDirection::Left)),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(InputEvent::Pan(PanDirection::Right)),
        _ => None,
    }
}

/// Translates a mouse press at `cursor` into an anchored zoom.
#[must_use]
pub fn input_event_for_click(button: MouseButton, cursor: PixelPoint) -> Option<InputEvent> {
    match button {
        MouseButton::Left => Some(InputEvent::ZoomInAt(cursor)),
        MouseButton::Right => Some(InputEvent::ZoomOutAt(cursor)),
        _ => None,
    }
}
