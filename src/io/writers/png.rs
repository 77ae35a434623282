use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

pub fn write_rgba_png(output: &Path, cols: u32, rows: u32, rgba: &[u8]) -> crate::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new(&mut writer);
    encoder.write_image(rgba, cols, rows, ExtendedColorType::Rgba8)?;
    writer.flush()?;
    Ok(())
}
