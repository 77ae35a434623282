use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default source image, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "assets/shoolin logo.jpg";

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_icons";

/// Generator inputs suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    pub source: PathBuf,
    /// Root of the `android/` and `ios/` trees; created if absent
    pub output_dir: PathBuf,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
