use std::fs;
use std::path::{Path, PathBuf};

use appicon::{
    ANDROID_ICONS, Error, GeneratorParams, IOS_ICONS, Platform, all_icons, create_icon_sizes,
    generate_icons, generate_with_params, load_rgba, pad_to_square,
};
use image::{ColorType, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// 800x600 opaque gradient saved as JPEG, like a typical logo export.
fn write_source(dir: &Path) -> PathBuf {
    let img = RgbImage::from_fn(800, 600, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let path = dir.join("logo.jpg");
    img.save(&path).unwrap();
    path
}

fn file_count(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            if path.is_dir() { file_count(&path) } else { 1 }
        })
        .sum()
}

#[test]
fn generates_every_icon_at_its_size() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let out = dir.path().join("generated_icons");

    let report = generate_icons(&source, &out).unwrap();

    assert_eq!(report.canvas_side, 800);
    assert_eq!((report.source_width, report.source_height), (800, 600));
    assert_eq!(report.icons.len(), 20);
    assert_eq!(report.icons_for(Platform::Android).count(), 5);
    assert_eq!(report.icons_for(Platform::Ios).count(), 15);
    assert_eq!(file_count(&out), 20);

    for spec in all_icons() {
        let path = spec.output_path(&out);
        let img = image::open(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert_eq!((img.width(), img.height()), (spec.size, spec.size), "{spec}");
        assert_eq!(img.color(), ColorType::Rgba8, "{spec}");
    }
}

#[test]
fn exact_paths_for_known_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let out = dir.path().join("icons");
    generate_icons(&source, &out).unwrap();

    let mdpi = image::open(out.join("android/mipmap-mdpi/ic_launcher.png")).unwrap();
    assert_eq!((mdpi.width(), mdpi.height()), (48, 48));

    let store = image::open(out.join("ios/AppIcon.appiconset/Icon-App-1024x1024@1x.png")).unwrap();
    assert_eq!((store.width(), store.height()), (1024, 1024));

    let ipad_pro = image::open(out.join("ios/AppIcon.appiconset/Icon-App-83.5x83.5@2x.png")).unwrap();
    assert_eq!((ipad_pro.width(), ipad_pro.height()), (167, 167));
}

#[test]
fn letterbox_padding_is_transparent() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let out = dir.path().join("icons");
    generate_icons(&source, &out).unwrap();

    // 600 of 800 rows are content, so the top and bottom eighth is padding.
    let icon = image::open(IOS_ICONS[14].output_path(&out)).unwrap().into_rgba8();
    assert_eq!(icon.get_pixel(512, 0)[3], 0);
    assert_eq!(icon.get_pixel(512, 1023)[3], 0);
    assert!(icon.get_pixel(512, 512)[3] >= 254);
}

#[test]
fn canvas_centres_source_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("tall.png");
    RgbImage::from_pixel(5, 8, Rgb([1, 2, 3])).save(&source).unwrap();

    let (cols, rows, rgba) = load_rgba(&source).unwrap();
    let canvas = pad_to_square(&rgba, cols, rows).unwrap();
    assert_eq!(canvas.side, 8);
    assert_eq!((canvas.pad_left, canvas.pad_top), (1, 0));
    assert_eq!(canvas.pixel(0, 4), [0, 0, 0, 0]);
    assert_eq!(canvas.pixel(1, 4), [1, 2, 3, 255]);
    assert_eq!(canvas.pixel(5, 4), [1, 2, 3, 255]);
    assert_eq!(canvas.pixel(6, 4), [0, 0, 0, 0]);
}

#[test]
fn png_bytes_under_jpg_name_generate_all_icons() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("shoolin logo.jpg");
    RgbaImage::from_pixel(80, 60, Rgba([200, 30, 30, 255]))
        .save_with_format(&source, ImageFormat::Png)
        .unwrap();
    let out = dir.path().join("icons");

    let report = generate_icons(&source, &out).unwrap();
    assert_eq!((report.source_width, report.source_height), (80, 60));
    assert_eq!(file_count(&out), 20);
}

#[test]
fn extensionless_source_generates_all_icons() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logo");
    RgbImage::from_pixel(60, 90, Rgb([5, 50, 150]))
        .save_with_format(&source, ImageFormat::Png)
        .unwrap();
    let out = dir.path().join("icons");

    assert!(create_icon_sizes(&source, &out));
    assert_eq!(file_count(&out), 20);
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated_icons");

    let err = generate_icons(&dir.path().join("missing.jpg"), &out).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound { .. }));
    assert!(!out.exists());

    assert!(!create_icon_sizes(&dir.path().join("missing.jpg"), &out));
    assert_eq!(file_count(&out), 0);
}

#[test]
fn undecodable_source_fails() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logo.jpg");
    fs::write(&source, b"not an image").unwrap();

    let out = dir.path().join("icons");
    assert!(matches!(generate_icons(&source, &out), Err(Error::Image(_))));
    assert!(!create_icon_sizes(&source, &out));
    assert_eq!(file_count(&out), 0);
}

#[test]
fn second_run_overwrites_with_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let out = dir.path().join("icons");

    assert!(create_icon_sizes(&source, &out));
    let first: Vec<Vec<u8>> = all_icons()
        .map(|spec| fs::read(spec.output_path(&out)).unwrap())
        .collect();

    assert!(create_icon_sizes(&source, &out));
    let second: Vec<Vec<u8>> = all_icons()
        .map(|spec| fs::read(spec.output_path(&out)).unwrap())
        .collect();

    assert_eq!(first, second);
    assert_eq!(file_count(&out), ANDROID_ICONS.len() + IOS_ICONS.len());
}

#[test]
fn params_drive_source_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let params = GeneratorParams {
        source: write_source(dir.path()),
        output_dir: dir.path().join("from_params"),
    };

    let report = generate_with_params(&params).unwrap();
    assert_eq!(report.output_dir, params.output_dir);
    assert_eq!(file_count(&params.output_dir), 20);
}
