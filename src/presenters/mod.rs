//! Presentation adapters implementing the display surface port.

pub mod pixels;
