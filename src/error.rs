//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode/encode, and resizer errors, and provides semantic
//! variants for a missing source and malformed pixel buffers.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Source image '{}' not found", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize buffer error: {0}")]
    ResizeBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("RGBA buffer has {actual} bytes, expected {expected}")]
    InvalidBuffer { expected: usize, actual: usize },

    #[error("Image dimensions must be greater than 0, got: {cols}x{rows}")]
    ZeroSize { cols: u32, rows: u32 },
}
