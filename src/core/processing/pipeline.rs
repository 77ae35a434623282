use std::path::Path;

use tracing::info;

use crate::core::processing::padding::{SquareCanvas, pad_to_square};
use crate::error::Result;
use crate::io::source::load_rgba;

/// Loads the source image and pads it to a transparent square canvas.
pub fn load_square_canvas(source: &Path) -> Result<SquareCanvas> {
    let (cols, rows, rgba) = load_rgba(source)?;
    let canvas = pad_to_square(&rgba, cols, rows)?;
    info!(
        "Square canvas: {}x{} (original {}x{}, offset {},{})",
        canvas.side, canvas.side, cols, rows, canvas.pad_left, canvas.pad_top
    );
    Ok(canvas)
}
