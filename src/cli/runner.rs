use tracing::{error, info};

use appicon::{GeneratorParams, create_icon_sizes};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
}

/// Runs one generation and returns whether it succeeded.
pub fn run(params: &GeneratorParams) -> bool {
    init_logging();

    info!("Flutter App Icon Generator");
    info!("Source image: {:?}", params.source);
    info!("Output directory: {:?}", params.output_dir);

    if !create_icon_sizes(&params.source, &params.output_dir) {
        error!("Icon generation failed!");
        return false;
    }

    info!("Successfully generated all app icons!");
    info!("Next steps:");
    info!("1. Copy Android icons to: android/app/src/main/res/");
    info!("2. Copy iOS icons to: ios/Runner/Assets.xcassets/AppIcon.appiconset/");
    info!("3. Update app name in AndroidManifest.xml if needed");
    true
}
