use std::path::Path;

use image::ImageReader;
use tracing::info;

use crate::error::Result;

/// Decodes a raster image and normalizes it to 8-bit RGBA.
///
/// The format is detected from the file contents, so a PNG saved under a
/// `.jpg` name or without an extension still decodes. Returns
/// `(cols, rows, rgba)`. The decoded image is dropped once the RGBA buffer
/// has been taken out of it.
pub fn load_rgba(path: &Path) -> Result<(u32, u32, Vec<u8>)> {
    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    info!(
        "Loaded {:?}: {}x{} ({:?})",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    let rgba = decoded.into_rgba8();
    let (cols, rows) = rgba.dimensions();
    Ok((cols, rows, rgba.into_raw()))
}
