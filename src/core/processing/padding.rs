use tracing::debug;

use crate::error::{Error, Result};

/// Bytes per interleaved RGBA pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Transparent square buffer with the original image pasted at its centre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareCanvas {
    pub side: u32,
    /// Original width before padding
    pub cols: u32,
    /// Original height before padding
    pub rows: u32,
    pub pad_left: u32,
    pub pad_top: u32,
    /// Interleaved RGBA, `side * side * 4` bytes
    pub pixels: Vec<u8>,
}

impl SquareCanvas {
    /// RGBA value at `(x, y)` on the canvas.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not less than `side`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * self.side as usize + x as usize) * RGBA_CHANNELS;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[offset..offset + RGBA_CHANNELS]);
        px
    }
}

/// Pads an RGBA image to a square of side `max(cols, rows)`.
///
/// The original is placed at `((side - cols) / 2, (side - rows) / 2)`; odd
/// differences round toward the top-left. New area is `[0, 0, 0, 0]`.
pub fn pad_to_square(rgba: &[u8], cols: u32, rows: u32) -> Result<SquareCanvas> {
    if cols == 0 || rows == 0 {
        return Err(Error::ZeroSize { cols, rows });
    }
    let (c, r) = (cols as usize, rows as usize);
    let expected = c * r * RGBA_CHANNELS;
    if rgba.len() != expected {
        return Err(Error::InvalidBuffer {
            expected,
            actual: rgba.len(),
        });
    }

    let side = cols.max(rows);
    let pad_left = (side - cols) / 2;
    let pad_top = (side - rows) / 2;

    debug!(cols, rows, pad_left, pad_top, side, "Padding image to square canvas");

    let max_dim = side as usize;
    let row_bytes = c * RGBA_CHANNELS;
    let mut padded = vec![0u8; max_dim * max_dim * RGBA_CHANNELS];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..r {
        let src_offset = row * row_bytes;
        let dst_offset =
            ((row + pad_top as usize) * max_dim + pad_left as usize) * RGBA_CHANNELS;
        padded[dst_offset..dst_offset + row_bytes]
            .copy_from_slice(&rgba[src_offset..src_offset + row_bytes]);
    }

    Ok(SquareCanvas {
        side,
        cols,
        rows,
        pad_left,
        pad_top,
        pixels: padded,
    })
}
