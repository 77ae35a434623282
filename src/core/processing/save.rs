use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::core::processing::resize::IconResizer;
use crate::error::Result;
use crate::io::writers::png::write_rgba_png;
use crate::types::IconSpec;

/// An icon written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedIcon {
    pub spec: IconSpec,
    pub path: PathBuf,
}

/// Resizes the canvas for `spec` and writes it under `root`, creating the
/// icon's directory first. An existing file is overwritten.
pub fn save_icon(resizer: &mut IconResizer, spec: &IconSpec, root: &Path) -> Result<GeneratedIcon> {
    let dir = root.join(spec.relative_dir());
    fs::create_dir_all(&dir)?;

    let rgba = resizer.resize(spec.size)?;
    let path = dir.join(spec.file_name());
    write_rgba_png(&path, spec.size, spec.size, &rgba)?;

    info!("  {}", spec);
    Ok(GeneratedIcon {
        spec: *spec,
        path,
    })
}

/// Writes every icon in `specs`, in order. Stops at the first failure;
/// icons already written stay on disk.
pub fn save_icon_set<'a>(
    resizer: &mut IconResizer,
    specs: impl IntoIterator<Item = &'a IconSpec>,
    root: &Path,
) -> Result<Vec<GeneratedIcon>> {
    specs
        .into_iter()
        .map(|spec| save_icon(resizer, spec, root))
        .collect()
}
