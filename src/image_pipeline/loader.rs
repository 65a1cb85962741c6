//! Image loading module
//!
//! Reads a file, decodes it through an [`ImageReader`] and normalizes the
//! result to three-channel RGB.

mod reader;
mod image_crate_reader;
mod load;
pub mod types;

pub use reader::ImageReader;
pub use image_crate_reader::ImageCrateReader;
pub use load::{load_image, read_rgb_with, try_load_image};
pub use types::{ColorMode, DecodedImage};
