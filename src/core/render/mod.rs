pub mod pixel_source;
pub mod render_frame;
