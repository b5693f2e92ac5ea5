use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::viewport::PanDirection;

/// Discrete events delivered by an input source.
///
/// Pan and keyboard zoom are key-driven; the `At` variants carry the cursor
/// pixel of a mouse click. `Quit` covers both the quit key and window close.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    ZoomInAt(PixelPoint),
    ZoomOutAt(PixelPoint),
    Quit,
}
