//! Shared types used across appicon: the target `Platform`, a single `IconSpec`,
//! and the two fixed icon tables.
use std::path::{Path, PathBuf};

use serde::Serialize;

/// File name every Android density bucket uses.
pub const ANDROID_ICON_FILE: &str = "ic_launcher.png";

/// Asset catalog directory holding the iOS icons.
pub const IOS_ICONSET_DIR: &str = "AppIcon.appiconset";

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Top-level directory under the output root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Android => write!(f, "Android"),
            Platform::Ios => write!(f, "iOS"),
        }
    }
}

/// One output icon: the platform, the density folder (Android) or file stem (iOS),
/// and the square edge length in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct IconSpec {
    pub platform: Platform,
    pub name: &'static str,
    pub size: u32,
}

impl IconSpec {
    pub const fn android(folder: &'static str, size: u32) -> Self {
        Self {
            platform: Platform::Android,
            name: folder,
            size,
        }
    }

    pub const fn ios(filename: &'static str, size: u32) -> Self {
        Self {
            platform: Platform::Ios,
            name: filename,
            size,
        }
    }

    /// Directory of this icon relative to the output root.
    pub fn relative_dir(&self) -> PathBuf {
        match self.platform {
            Platform::Android => Path::new(self.platform.dir_name()).join(self.name),
            Platform::Ios => Path::new(self.platform.dir_name()).join(IOS_ICONSET_DIR),
        }
    }

    pub fn file_name(&self) -> String {
        match self.platform {
            Platform::Android => ANDROID_ICON_FILE.to_string(),
            Platform::Ios => format!("{}.png", self.name),
        }
    }

    /// Path of this icon relative to the output root, e.g.
    /// `android/mipmap-mdpi/ic_launcher.png`.
    pub fn relative_path(&self) -> PathBuf {
        self.relative_dir().join(self.file_name())
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }

    /// Short label used in progress logs, e.g. `mipmap-mdpi/ic_launcher.png`.
    pub fn label(&self) -> String {
        match self.platform {
            Platform::Android => format!("{}/{}", self.name, ANDROID_ICON_FILE),
            Platform::Ios => self.file_name(),
        }
    }
}

impl std::fmt::Display for IconSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.label(), self.size, self.size)
    }
}

/// Android launcher icons, one per density bucket.
pub const ANDROID_ICONS: [IconSpec; 5] = [
    IconSpec::android("mipmap-mdpi", 48),
    IconSpec::android("mipmap-hdpi", 72),
    IconSpec::android("mipmap-xhdpi", 96),
    IconSpec::android("mipmap-xxhdpi", 144),
    IconSpec::android("mipmap-xxxhdpi", 192),
];

/// iOS AppIcon set entries, named `Icon-App-<points>@<scale>`.
pub const IOS_ICONS: [IconSpec; 15] = [
    IconSpec::ios("Icon-App-20x20@1x", 20),
    IconSpec::ios("Icon-App-20x20@2x", 40),
    IconSpec::ios("Icon-App-20x20@3x", 60),
    IconSpec::ios("Icon-App-29x29@1x", 29),
    IconSpec::ios("Icon-App-29x29@2x", 58),
    IconSpec::ios("Icon-App-29x29@3x", 87),
    IconSpec::ios("Icon-App-40x40@1x", 40),
    IconSpec::ios("Icon-App-40x40@2x", 80),
    IconSpec::ios("Icon-App-40x40@3x", 120),
    IconSpec::ios("Icon-App-60x60@2x", 120),
    IconSpec::ios("Icon-App-60x60@3x", 180),
    IconSpec::ios("Icon-App-76x76@1x", 76),
    IconSpec::ios("Icon-App-76x76@2x", 152),
    IconSpec::ios("Icon-App-83.5x83.5@2x", 167),
    IconSpec::ios("Icon-App-1024x1024@1x", 1024),
];

/// Android table followed by the iOS table, in generation order.
pub fn all_icons() -> impl Iterator<Item = &'static IconSpec> {
    ANDROID_ICONS.iter().chain(IOS_ICONS.iter())
}
