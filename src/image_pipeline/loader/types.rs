//! Decoded image types

use std::fmt;

use image::{ColorType, DynamicImage, GenericImageView};

/// Channel layout of a decoded raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMode {
    /// Single-channel grayscale
    Luma,
    /// Grayscale with alpha
    LumaAlpha,
    /// Three-channel color
    Rgb,
    /// Three-channel color with alpha
    Rgba,
    /// Any layout without a dedicated variant, carrying the decoder's name for it
    Other(String),
}

impl ColorMode {
    /// Short symbolic name of the mode (`L`, `LA`, `RGB`, `RGBA`, ...)
    pub fn symbol(&self) -> &str {
        match self {
            ColorMode::Luma => "L",
            ColorMode::LumaAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::Other(name) => name,
        }
    }
}

impl From<ColorType> for ColorMode {
    fn from(color: ColorType) -> Self {
        match color {
            ColorType::L8 | ColorType::L16 => ColorMode::Luma,
            ColorType::La8 | ColorType::La16 => ColorMode::LumaAlpha,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => ColorMode::Rgb,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => ColorMode::Rgba,
            other => ColorMode::Other(format!("{other:?}")),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An in-memory decoded raster.
///
/// Images produced by the loader are always 8-bit RGB; [`DecodedImage::new`]
/// keeps whatever layout the source had.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pixels: DynamicImage,
}

impl DecodedImage {
    /// Wrap a decoded image without touching its color layout
    pub fn new(pixels: DynamicImage) -> Self {
        Self { pixels }
    }

    /// Convert to 8-bit RGB, expanding grayscale and dropping alpha.
    pub fn into_rgb(self) -> Self {
        match self.pixels {
            DynamicImage::ImageRgb8(_) => self,
            other => Self {
                pixels: DynamicImage::ImageRgb8(other.to_rgb8()),
            },
        }
    }

    pub fn mode(&self) -> ColorMode {
        ColorMode::from(self.pixels.color())
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.dimensions().0
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.dimensions().1
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }
}

impl From<DynamicImage> for DecodedImage {
    fn from(pixels: DynamicImage) -> Self {
        Self::new(pixels)
    }
}
