pub mod render_frame;
pub mod render_frame_parallel;
