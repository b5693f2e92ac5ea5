pub mod display_surface;
pub mod input_source;
