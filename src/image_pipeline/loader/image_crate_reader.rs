//! Image reader implementation using the `image` crate.
//!
//! Supports every raster format enabled on the `image` dependency (PNG, JPEG,
//! GIF, BMP, TIFF, WebP, PNM, TGA). The format is sniffed from the content,
//! so file extensions play no part in decoding.

use std::io::Cursor;

use tracing::debug;

use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::loader::reader::ImageReader;
use crate::image_pipeline::loader::types::DecodedImage;

/// Image reader backed by the `image` crate's format detection and decoders.
pub struct ImageCrateReader;

impl ImageReader for ImageCrateReader {
    /// Decodes an encoded image held in memory.
    ///
    /// The returned image keeps the source color layout; normalization to RGB
    /// is left to the caller.
    ///
    /// # Errors
    ///
    /// * `AnalysisError::DecodeError` - the format is unknown or the content is corrupt
    fn read_image(&self, data: &[u8]) -> Result<DecodedImage> {
        debug!("Decoding image, {} bytes", data.len());

        let reader = image::ImageReader::new(Cursor::new(data)).with_guessed_format()?;
        let format = reader.format();
        let decoded = reader
            .decode()
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        let image = DecodedImage::new(decoded);
        debug!(
            format = ?format,
            mode = %image.mode(),
            "Decoded image: {}x{}",
            image.width(),
            image.height()
        );

        Ok(image)
    }
}
