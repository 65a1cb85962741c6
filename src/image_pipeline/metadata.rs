//! Image metadata inspection
//!
//! Derives the channel count and `(width, height)` dimensions of a decoded
//! image.

use tracing::debug;

use crate::image_pipeline::loader::{ColorMode, DecodedImage};

/// Channel count and spatial dimensions of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    /// Number of channels implied by the color mode
    pub channel_count: usize,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageInfo {
    pub fn from_image(image: &DecodedImage) -> Self {
        let mode = image.mode();
        let channel_count = channel_count(&mode);
        debug!(mode = %mode, channel_count, "Inspected image");

        Self {
            channel_count,
            width: image.width(),
            height: image.height(),
        }
    }

    /// Dimensions as `(width, height)`, the image's native ordering
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Channel count for a color mode.
///
/// `L`, `RGB` and `RGBA` map to 1, 3 and 4. Any other mode falls back to the
/// length of its symbol, which is only approximate: it holds for `LA` but not
/// for arbitrary decoder names.
pub fn channel_count(mode: &ColorMode) -> usize {
    match mode {
        ColorMode::Luma => 1,
        ColorMode::Rgb => 3,
        ColorMode::Rgba => 4,
        other => other.symbol().chars().count(),
    }
}

/// Returns `(channel_count, (width, height))`, or `(None, None)` when there is
/// no image.
pub fn inspect(image: Option<&DecodedImage>) -> (Option<usize>, Option<(u32, u32)>) {
    match image {
        Some(image) => {
            let info = ImageInfo::from_image(image);
            (Some(info.channel_count), Some(info.dimensions()))
        }
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

    #[test]
    fn test_rgb_image() {
        let image = DecodedImage::new(DynamicImage::ImageRgb8(RgbImage::new(640, 480)));
        assert_eq!(inspect(Some(&image)), (Some(3), Some((640, 480))));
    }

    #[test]
    fn test_dimensions_are_width_then_height() {
        let image = DecodedImage::new(DynamicImage::ImageRgb8(RgbImage::new(7, 2)));
        let info = ImageInfo::from_image(&image);
        assert_eq!(info.dimensions(), (7, 2));
        assert_eq!(info.width, 7);
        assert_eq!(info.height, 2);
    }

    #[test]
    fn test_table_modes() {
        let gray = DecodedImage::new(DynamicImage::ImageLuma8(GrayImage::new(1, 1)));
        let rgba = DecodedImage::new(DynamicImage::ImageRgba8(RgbaImage::new(1, 1)));
        assert_eq!(inspect(Some(&gray)).0, Some(1));
        assert_eq!(inspect(Some(&rgba)).0, Some(4));
    }

    #[test]
    fn test_fallback_uses_symbol_length() {
        assert_eq!(channel_count(&ColorMode::LumaAlpha), 2);
        assert_eq!(channel_count(&ColorMode::Other("CMYK".to_string())), 4);
        assert_eq!(channel_count(&ColorMode::Other("I;16".to_string())), 4);
    }

    #[test]
    fn test_absent_image() {
        assert_eq!(inspect(None), (None, None));
    }
}
