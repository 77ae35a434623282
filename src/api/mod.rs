//! High-level library API: generate the full Android + iOS icon set from one
//! source image. Prefer these entrypoints over the low-level processing
//! modules when integrating appicon.
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use crate::core::params::GeneratorParams;
use crate::core::processing::pipeline::load_square_canvas;
use crate::core::processing::resize::IconResizer;
use crate::core::processing::save::{GeneratedIcon, save_icon_set};
use crate::error::{Error, Result};
use crate::types::{ANDROID_ICONS, IOS_ICONS, Platform};

/// Outcome of a successful generation run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// Source dimensions before padding
    pub source_width: u32,
    pub source_height: u32,
    /// Edge length of the padded square canvas
    pub canvas_side: u32,
    /// Every icon written, Android first, in table order
    pub icons: Vec<GeneratedIcon>,
}

impl GenerationReport {
    pub fn icons_for(&self, platform: Platform) -> impl Iterator<Item = &GeneratedIcon> {
        self.icons.iter().filter(move |icon| icon.spec.platform == platform)
    }
}

/// Generates all 20 icons from `source` into `output_dir`.
///
/// A missing source fails before anything is created. Any later failure is
/// returned as-is; icons written before it stay on disk.
pub fn generate_icons(source: &Path, output_dir: &Path) -> Result<GenerationReport> {
    if !source.exists() {
        return Err(Error::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    std::fs::create_dir_all(output_dir)?;

    let canvas = load_square_canvas(source)?;
    let mut resizer = IconResizer::new(&canvas)?;

    info!("Generating {} icons...", Platform::Android);
    let mut icons = save_icon_set(&mut resizer, &ANDROID_ICONS, output_dir)?;

    info!("Generating {} icons...", Platform::Ios);
    icons.extend(save_icon_set(&mut resizer, &IOS_ICONS, output_dir)?);

    Ok(GenerationReport {
        source: source.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        source_width: canvas.cols,
        source_height: canvas.rows,
        canvas_side: canvas.side,
        icons,
    })
}

/// Same as [`generate_icons`] with paths taken from `params`.
pub fn generate_with_params(params: &GeneratorParams) -> Result<GenerationReport> {
    generate_icons(&params.source, &params.output_dir)
}

/// Boolean form of [`generate_icons`]: logs the failure and returns `false`.
pub fn create_icon_sizes(source: &Path, output_dir: &Path) -> bool {
    match generate_icons(source, output_dir) {
        Ok(report) => {
            info!(
                "Generated {} icons in {:?}",
                report.icons.len(),
                report.output_dir
            );
            true
        }
        Err(Error::SourceNotFound { path }) => {
            error!("Error: Source image {:?} not found!", path);
            false
        }
        Err(e) => {
            error!("Error generating icons: {}", e);
            false
        }
    }
}
