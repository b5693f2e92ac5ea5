use crate::controllers::events::InputEvent;
use crate::core::data::viewport::{Viewport, ViewportError};

/// Owns the live viewport and tracks whether it changed since the last
/// completed render, so an idle frame can skip recomputation entirely.
#[derive(Debug)]
pub struct ViewportController {
    viewport: Viewport,
    dirty: bool,
}

impl ViewportController {
    /// A fresh controller is dirty: the first frame always renders.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            dirty: true,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Applies one input event to the viewport. `Quit` is not a viewport
    /// concern and is ignored; shutdown belongs to the frame loop.
    pub fn apply(&mut self, event: InputEvent) {
        let updated = match event {
            InputEvent::Pan(direction) => self.viewport.pan(direction),
            InputEvent::ZoomIn => self.viewport.zoom_in(),
            InputEvent::ZoomOut => self.viewport.zoom_out(),
            InputEvent::ZoomInAt(pixel) => self.viewport.zoom_in_at(pixel),
            InputEvent::ZoomOutAt(pixel) => self.viewport.zoom_out_at(pixel),
            InputEvent::Quit => return,
        };

        self.viewport = updated;
        self.dirty = true;
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewportError> {
        self.viewport = self.viewport.resized(width, height)?;
        self.dirty = true;
        Ok(())
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_rendered(&mut self) {
        self.dirty = false;
    }
}
