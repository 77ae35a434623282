use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::core::processing::padding::SquareCanvas;
use crate::error::{Error, Result};

/// Resizes one square canvas to many square targets.
///
/// The source image is built once and only ever read; each call produces a
/// fresh RGBA buffer. Resampling is Lanczos3 convolution on
/// alpha-premultiplied pixels.
pub struct IconResizer {
    src: Image<'static>,
    side: u32,
    resizer: Resizer,
    options: ResizeOptions,
}

impl IconResizer {
    pub fn new(canvas: &SquareCanvas) -> Result<Self> {
        let src = Image::from_vec_u8(
            canvas.side,
            canvas.side,
            canvas.pixels.clone(),
            PixelType::U8x4,
        )?;
        Ok(Self {
            src,
            side: canvas.side,
            resizer: Resizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        })
    }

    /// Returns the canvas resized to `size`×`size` as interleaved RGBA.
    pub fn resize(&mut self, size: u32) -> Result<Vec<u8>> {
        if size == 0 {
            return Err(Error::ZeroSize {
                cols: size,
                rows: size,
            });
        }
        if size == self.side {
            debug!(size, "Canvas already at target size, skipping resize");
            return Ok(self.src.buffer().to_vec());
        }

        debug!(from = self.side, to = size, "Resizing canvas");
        let mut dst = Image::new(size, size, PixelType::U8x4);
        self.resizer.resize(&self.src, &mut dst, &self.options)?;
        Ok(dst.into_vec())
    }
}
