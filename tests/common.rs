#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use image_shrink::InputFile;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A photo-like test surface: smooth gradients with a little deterministic texture.
pub fn create_test_surface(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        let noise = ((x.wrapping_mul(31) ^ y.wrapping_mul(17)) % 23) as u8;
        Rgb([
            ((x * 255 / width.max(1)) as u8).wrapping_add(noise),
            ((y * 255 / height.max(1)) as u8).wrapping_add(noise / 2),
            (((x + y) / 3 % 256) as u8).wrapping_add(noise),
        ])
    }))
}

pub fn encode_test_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let surface = match format {
        ImageFormat::Gif => DynamicImage::ImageRgba8(create_test_surface(width, height).to_rgba8()),
        _ => create_test_surface(width, height),
    };
    let mut buffer = Cursor::new(Vec::new());
    surface.write_to(&mut buffer, format).unwrap();
    buffer.into_inner()
}

pub fn create_input_file(name: &str, width: u32, height: u32, format: ImageFormat) -> InputFile {
    InputFile::new(
        name,
        format.to_mime_type(),
        encode_test_image(width, height, format),
    )
}

/// A flat-colour PNG: tiny on disk, but decoding inflates `side * side * 3` bytes.
pub fn create_large_png_input(name: &str, side: u32) -> InputFile {
    let surface = DynamicImage::ImageRgb8(RgbImage::from_pixel(side, side, Rgb([120, 80, 40])));
    let mut buffer = Cursor::new(Vec::new());
    surface.write_to(&mut buffer, ImageFormat::Png).unwrap();
    InputFile::new(name, "image/png", buffer.into_inner())
}

pub fn write_test_image(dir: &Path, name: &str, width: u32, height: u32, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_test_image(width, height, format)).unwrap();
    path
}

pub fn write_fake_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"fake image data").unwrap();
    path
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}
