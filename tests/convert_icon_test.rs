// End-to-end tests for the PNG -> ICO conversion against scratch repo roots.
use std::fs;
use std::path::Path;
use std::process::Command;

use icon_converter::icon_codec::read_ico_sizes;
use icon_converter::{AppError, IconConfig, IconPaths, IconSize, convert};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

fn write_rgba_source(paths: &IconPaths, width: u32, height: u32) {
    fs::create_dir_all(paths.source_path.parent().expect("assets dir")).expect("create assets");
    RgbaImage::from_pixel(width, height, Rgba([30, 144, 255, 255]))
        .save(&paths.source_path)
        .expect("write source png");
}

fn all_sizes() -> Vec<IconSize> {
    [256, 128, 64, 48, 32, 16].into_iter().map(IconSize::square).collect()
}

fn backups_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dest dir")
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("app_icon.ico.bak."))
        .collect();
    names.sort();
    names
}

fn is_backup_name(name: &str) -> bool {
    let Some(stamp) = name.strip_prefix("app_icon.ico.bak.") else {
        return false;
    };
    let stamp = stamp.get(..15).unwrap_or_default();
    stamp.len() == 15
        && stamp
            .char_indices()
            .all(|(i, c)| if i == 8 { c == 'T' } else { c.is_ascii_digit() })
}

#[test]
fn fresh_repo_gets_directory_and_six_size_icon() {
    let root = tempfile::tempdir().expect("tempdir");
    let paths = IconPaths::from_repo_root(root.path());
    write_rgba_source(&paths, 512, 512);

    let report = convert(&paths, &IconConfig::default()).expect("convert");

    assert!(paths.dest_dir.is_dir());
    assert_eq!(report.backup_path, None);
    assert_eq!(report.sizes, all_sizes());
    assert!(report.bytes_written > 0);
    assert_eq!(read_ico_sizes(&paths.dest_path).expect("parse ico"), all_sizes());
    assert!(backups_in(&paths.dest_dir).is_empty());
}

#[test]
fn rgb_source_without_alpha_converts() {
    let root = tempfile::tempdir().expect("tempdir");
    let paths = IconPaths::from_repo_root(root.path());
    fs::create_dir_all(root.path().join("assets")).expect("assets dir");
    DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 300, Rgb([10, 20, 30])))
        .save(&paths.source_path)
        .expect("write rgb png");

    let report = convert(&paths, &IconConfig::default()).expect("convert");
    assert_eq!(report.sizes, all_sizes());
}

#[test]
fn small_source_skips_larger_sizes() {
    let root = tempfile::tempdir().expect("tempdir");
    let paths = IconPaths::from_repo_root(root.path());
    write_rgba_source(&paths, 48, 48);

    let report = convert(&paths, &IconConfig::default()).expect("convert");

    let expected: Vec<IconSize> = [48, 32, 16].into_iter().map(IconSize::square).collect();
    assert_eq!(report.sizes, expected);
    assert_eq!(read_ico_sizes(&paths.dest_path).expect("parse ico"), expected);
}

#[test]
fn existing_icon_is_backed_up_before_overwrite() {
    let root = tempfile::tempdir().expect("tempdir");
    let paths = IconPaths::from_repo_root(root.path());
    write_rgba_source(&paths, 256, 256);
    fs::create_dir_all(&paths.dest_dir).expect("dest dir");
    fs::write(&paths.dest_path, b"previous icon").expect("seed dest");

    let report = convert(&paths, &IconConfig::default()).expect("convert");

    let backup = report.backup_path.expect("backup created");
    let name = backup.file_name().expect("file name").to_string_lossy().to_string();
    assert!(is_backup_name(&name), "unexpected backup name {name}");
    assert_eq!(fs::read(&backup).expect("read backup"), b"previous icon");
    assert_eq!(read_ico_sizes(&paths.dest_path).expect("parse ico"), all_sizes());
}

#[test]
fn missing_source_fails_without_any_writes() {
    let root = tempfile::tempdir().expect("tempdir");
    let paths = IconPaths::from_repo_root(root.path());

    let err = convert(&paths, &IconConfig::default()).expect_err("source is absent");

    assert!(matches!(err, AppError::MissingSource { .. }));
    assert!(err.to_string().contains(&paths.source_path.display().to_string()));
    assert_eq!(fs::read_dir(root.path()).expect("read root").count(), 0);
}

#[test]
fn failed_backup_aborts_before_overwriting() {
    let root = tempfile::tempdir().expect("tempdir");
    let paths = IconPaths::from_repo_root(root.path());
    write_rgba_source(&paths, 64, 64);
    fs::create_dir_all(&paths.dest_path).expect("dest path as directory");
    fs::write(paths.dest_path.join("marker"), b"inside").expect("marker");

    let err = convert(&paths, &IconConfig::default()).expect_err("backup should fail");

    assert!(matches!(err, AppError::Backup { ref from, .. } if *from == paths.dest_path));
    assert_eq!(fs::read_dir(&paths.dest_dir).expect("read dest dir").count(), 1);
    assert!(backups_in(&paths.dest_dir).is_empty());
    assert!(paths.dest_path.is_dir());
    assert_eq!(fs::read(paths.dest_path.join("marker")).expect("marker"), b"inside");
}

#[test]
fn corrupt_source_leaves_destination_untouched() {
    let root = tempfile::tempdir().expect("tempdir");
    let paths = IconPaths::from_repo_root(root.path());
    fs::create_dir_all(root.path().join("assets")).expect("assets dir");
    fs::write(&paths.source_path, b"\x89PNG but not really").expect("write junk");
    fs::create_dir_all(&paths.dest_dir).expect("dest dir");
    fs::write(&paths.dest_path, b"keep me").expect("seed dest");

    let err = convert(&paths, &IconConfig::default()).expect_err("decode should fail");

    assert!(matches!(err, AppError::Decode { .. }));
    assert_eq!(fs::read(&paths.dest_path).expect("read dest"), b"keep me");
}

// Back-to-back runs usually share a second, so this exercises the `-<n>`
// collision suffix. Runs a second apart are covered in `backup::tests`.
#[test]
fn same_second_runs_keep_output_stable_and_backups_distinct() {
    let root = tempfile::tempdir().expect("tempdir");
    let paths = IconPaths::from_repo_root(root.path());
    write_rgba_source(&paths, 512, 512);

    convert(&paths, &IconConfig::default()).expect("first run");
    let first = fs::read(&paths.dest_path).expect("first output");

    let second_report = convert(&paths, &IconConfig::default()).expect("second run");
    let second = fs::read(&paths.dest_path).expect("second output");

    let third_report = convert(&paths, &IconConfig::default()).expect("third run");
    let third = fs::read(&paths.dest_path).expect("third output");

    assert_eq!(first, second);
    assert_eq!(second, third);

    let second_backup = second_report.backup_path.expect("second backup");
    let third_backup = third_report.backup_path.expect("third backup");
    assert_ne!(second_backup, third_backup);
    assert_eq!(fs::read(&second_backup).expect("read backup"), first);
    assert_eq!(backups_in(&paths.dest_dir).len(), 2);
}

#[test]
fn binary_exits_non_zero_when_source_is_missing() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    assert!(
        !manifest_dir.join("assets").join("icon.png").exists(),
        "crate dir must not contain assets/icon.png for this check"
    );

    let output = Command::new(env!("CARGO_BIN_EXE_convert-icon"))
        .env("RUST_LOG", "info")
        .output()
        .expect("run convert-icon");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("icon.png"), "stderr: {stderr}");
    assert!(!manifest_dir.join("windows").exists());
}
