//! PNG fixtures written into temporary directories.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

pub fn solid_rgb(dir: &Path, name: &str, width: u32, height: u32, pixel: [u8; 3]) -> PathBuf {
    save(dir, name, DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(pixel))))
}

pub fn gradient_gray(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let gray = GrayImage::from_fn(width, height, |x, y| Luma([((x * 7 + y * 13) % 256) as u8]));
    save(dir, name, DynamicImage::ImageLuma8(gray))
}

pub fn patterned_rgba(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let rgba = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 3) as u8, (y * 5) as u8, ((x + y) * 2) as u8, 128])
    });
    save(dir, name, DynamicImage::ImageRgba8(rgba))
}

fn save(dir: &Path, name: &str, image: DynamicImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}
