//! Windowed input shell: winit events translated into domain input events,
//! presented through the pixels framebuffer surface.

pub mod events;
mod run;

pub use run::run_gui;
