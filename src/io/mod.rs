//! I/O layer: decoding the source image to RGBA and `writers` for the
//! PNG icon outputs.
pub mod source;
pub use source::load_rgba;

pub mod writers;
pub use writers::png::write_rgba_png;
