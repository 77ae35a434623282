#![doc = r#"
appicon — launcher icon generator for Android and iOS apps.

This crate turns one source image into the fixed set of launcher icons a
mobile app ships: five Android `mipmap-*` density buckets and the fifteen
entries of an iOS `AppIcon.appiconset`. The source is padded to a transparent
square (centred, longer edge kept) and then resized with Lanczos3 to each
target size. It powers the `appicon` binary and can be embedded in your own
build tooling.

Add dependency
--------------
```toml
[dependencies]
appicon = "0.1"
```

Quick start
-----------
```rust,no_run
use std::path::Path;

fn main() -> appicon::Result<()> {
    let report = appicon::generate_icons(
        Path::new("assets/logo.png"),
        Path::new("generated_icons"),
    )?;

    for icon in &report.icons {
        println!("{} -> {}", icon.spec, icon.path.display());
    }
    Ok(())
}
```

Output layout
-------------
```text
generated_icons/
  android/mipmap-mdpi/ic_launcher.png        48x48
  android/mipmap-hdpi/ic_launcher.png        72x72
  ...
  ios/AppIcon.appiconset/Icon-App-20x20@1x.png      20x20
  ...
  ios/AppIcon.appiconset/Icon-App-1024x1024@1x.png  1024x1024
```

Error handling
--------------
All fallible functions return `appicon::Result<T>`; match on `appicon::Error`
to tell a missing source apart from decode or I/O failures.

```rust,no_run
use std::path::Path;
use appicon::{generate_icons, Error};

match generate_icons(Path::new("missing.png"), Path::new("out")) {
    Ok(report) => println!("wrote {} icons", report.icons.len()),
    Err(Error::SourceNotFound { path }) => eprintln!("no source at {}", path.display()),
    Err(other) => eprintln!("failed: {other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `Platform`, `IconSpec` and the two icon tables.
- [`core`] — padding, resizing and save primitives.
- [`io`] — source decoding and PNG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use core::params::GeneratorParams;
pub use core::processing::padding::{SquareCanvas, pad_to_square};
pub use core::processing::resize::IconResizer;
pub use core::processing::save::GeneratedIcon;
pub use error::{Error, Result};
pub use types::{ANDROID_ICONS, IOS_ICONS, IconSpec, Platform, all_icons};

// Readers / writers
pub use io::{load_rgba, write_rgba_png};

// High-level API re-exports
pub use api::{GenerationReport, create_icon_sizes, generate_icons, generate_with_params};
