#![allow(dead_code)]

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// A temp dir with an empty `assets/` input and a not-yet-created `icons/` output.
pub fn create_workspace() -> Workspace {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("assets");
    let output = dir.path().join("icons");
    fs::create_dir(&input).unwrap();
    Workspace { dir, input, output }
}

pub fn write_rgba_icon(dir: &Path, index: u32, width: u32, height: u32) -> PathBuf {
    let path = dir.join(format!("icon-{}.png", index));
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 251) as u8, (y % 241) as u8, 90, ((x * y) % 256) as u8])
    }))
    .save(&path)
    .unwrap();
    path
}

pub fn write_rgb_icon(dir: &Path, index: u32, width: u32, height: u32) -> PathBuf {
    let path = dir.join(format!("icon-{}.png", index));
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, 30, (y % 256) as u8])
    }))
    .save(&path)
    .unwrap();
    path
}

/// Writes a PNG whose signature is valid but whose data stops early.
pub fn write_truncated_icon(dir: &Path, index: u32) -> PathBuf {
    let source = dir.join("truncate-source.png");
    DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x ^ y) * 5 % 256) as u8])
    }))
    .save(&source)
    .unwrap();
    let bytes = fs::read(&source).unwrap();
    fs::remove_file(&source).unwrap();

    let path = dir.join(format!("icon-{}.png", index));
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
    path
}

pub fn output_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
