//! Path-based loading with RGB normalization.

use std::path::Path;

use tracing::{debug, error};

use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::loader::image_crate_reader::ImageCrateReader;
use crate::image_pipeline::loader::reader::ImageReader;
use crate::image_pipeline::loader::types::{ColorMode, DecodedImage};

/// Reads and decodes `path` with `reader`, normalizing the result to 8-bit RGB.
pub fn read_rgb_with<R: ImageReader>(reader: &R, path: &Path) -> Result<DecodedImage> {
    let data = std::fs::read(path)
        .map_err(|e| AnalysisError::InputReadError(format!("{}: {}", path.display(), e)))?;

    let image = reader.read_image(&data)?;
    if image.mode() != ColorMode::Rgb {
        debug!(source_mode = %image.mode(), "Normalizing image to RGB");
    }
    Ok(image.into_rgb())
}

/// Loads the image at `path` as 8-bit RGB.
///
/// # Errors
///
/// * `AnalysisError::InputReadError` - the path does not exist or cannot be read
/// * `AnalysisError::DecodeError` - the content is not a supported image
pub fn try_load_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage> {
    read_rgb_with(&ImageCrateReader, path.as_ref())
}

/// Loads the image at `path` as 8-bit RGB, or `None` if it cannot be loaded.
///
/// The failure is logged here, at the point it happens.
pub fn load_image<P: AsRef<Path>>(path: P) -> Option<DecodedImage> {
    let path = path.as_ref();
    match try_load_image(path) {
        Ok(image) => Some(image),
        Err(e) => {
            error!(path = %path.display(), "Failed to load image: {}", e);
            None
        }
    }
}
