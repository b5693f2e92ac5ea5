use crate::controllers::events::InputEvent;
use crate::controllers::ports::display_surface::DisplaySurface;
use crate::controllers::ports::input_source::InputSource;
use crate::controllers::viewport::ViewportController;
use crate::core::actions::render_frame::RenderFrameError;
use crate::core::actions::render_frame_parallel::render_frame_parallel;
use crate::core::colour_mapping::colour_map::{ColourMap, ColourMapKind};
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::{Viewport, ViewportError};
use log::{debug, info};
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExplorerConfigError {
    ZeroMaxIterations,
}

impl fmt::Display for ExplorerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for ExplorerConfigError {}

#[derive(Debug)]
pub enum ExplorerError<D: Error> {
    Render(RenderFrameError),
    Viewport(ViewportError),
    Display(D),
}

impl<D: Error> fmt::Display for ExplorerError<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Display(err) => write!(f, "display error: {}", err),
        }
    }
}

impl<D: Error + 'static> Error for ExplorerError<D> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Display(err) => Some(err),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum ExplorerStatus {
    Continue,
    Quit,
}

/// Drives one explorer session: input events mutate the viewport, and a
/// frame is recomputed only when the viewport changed since the last one.
///
/// Each frame follows a strict render-then-mutate order: all pending events
/// are applied first, then the (now stable) viewport is rendered, then the
/// result is presented. The viewport is never touched mid-render.
pub struct Explorer {
    controller: ViewportController,
    colour_map: Box<dyn ColourMap>,
    max_iterations: u32,
}

impl Explorer {
    pub fn new(
        viewport: Viewport,
        kind: ColourMapKind,
        max_iterations: u32,
    ) -> Result<Self, ExplorerConfigError> {
        if max_iterations == 0 {
            return Err(ExplorerConfigError::ZeroMaxIterations);
        }

        Ok(Self {
            controller: ViewportController::new(viewport),
            colour_map: colour_map_factory(kind, max_iterations),
            max_iterations,
        })
    }

    /// Builds an explorer with the palette's own iteration bound.
    #[must_use]
    pub fn with_defaults(viewport: Viewport, kind: ColourMapKind) -> Self {
        Self::new(viewport, kind, kind.default_max_iterations())
            .expect("palette default bounds are non-zero")
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.controller.viewport()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn handle_event(&mut self, event: InputEvent) -> ExplorerStatus {
        if event == InputEvent::Quit {
            return ExplorerStatus::Quit;
        }

        self.controller.apply(event);
        ExplorerStatus::Continue
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewportError> {
        self.controller.resize(width, height)
    }

    /// Recomputes the frame if the viewport changed since the last render;
    /// returns `None` on an idle frame.
    pub fn render_if_dirty(&mut self) -> Result<Option<PixelBuffer>, RenderFrameError> {
        if !self.controller.is_dirty() {
            return Ok(None);
        }

        let viewport = self.controller.viewport();
        let start = Instant::now();
        let frame = render_frame_parallel(&viewport, self.max_iterations, self.colour_map.as_ref())?;
        debug!(
            "rendered {}x{} at scale {:e} in {:?}",
            viewport.width(),
            viewport.height(),
            viewport.scale(),
            start.elapsed()
        );

        self.controller.mark_rendered();
        Ok(Some(frame))
    }

    /// The blocking frame loop over poll-style collaborators: drain events,
    /// render if dirty, present. Returns once the input source reports quit.
    pub fn run<I, D>(
        &mut self,
        input: &mut I,
        display: &mut D,
    ) -> Result<(), ExplorerError<D::Failure>>
    where
        I: InputSource,
        D: DisplaySurface,
    {
        info!(
            "explorer started with {} at bound {}",
            self.colour_map.display_name(),
            self.max_iterations
        );

        loop {
            for event in input.poll_events() {
                if self.handle_event(event) == ExplorerStatus::Quit {
                    info!("quit requested");
                    return Ok(());
                }
            }

            // follow the surface size so the scale computation always works
            // against the dimensions that will be presented
            let (screen_width, screen_height) = (display.screen_width(), display.screen_height());
            let viewport = self.controller.viewport();
            if screen_width != 0
                && screen_height != 0
                && (screen_width, screen_height) != (viewport.width(), viewport.height())
            {
                self.resize(screen_width, screen_height)
                    .map_err(ExplorerError::Viewport)?;
            }

            if let Some(frame) = self.render_if_dirty().map_err(ExplorerError::Render)? {
                display.present(&frame).map_err(ExplorerError::Display)?;
            }
        }
    }
}
