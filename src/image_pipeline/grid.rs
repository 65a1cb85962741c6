//! Dense pixel grids
//!
//! Materializes a decoded image as an `ndarray` grid indexed
//! `[row, col]` or `[row, col, channel]`, i.e. `(height, width[, channels])`.

use ndarray::{Array2, Array3, ArrayView2, ArrayViewD, Axis};
use tracing::error;

use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::loader::{ColorMode, DecodedImage};

/// 8-bit intensities of a decoded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelGrid {
    /// Single-channel data, shape `(height, width)`
    Single(Array2<u8>),
    /// Interleaved channels, shape `(height, width, channels)`
    Multi(Array3<u8>),
}

impl PixelGrid {
    /// Builds a grid from the image's pixel buffer.
    ///
    /// Grayscale becomes a 2-D grid; every other layout keeps its channels on
    /// the last axis. Modes without a dedicated variant are read as RGB.
    pub fn from_image(image: &DecodedImage) -> Result<Self> {
        let height = image.height() as usize;
        let width = image.width() as usize;
        let pixels = image.pixels();

        match image.mode() {
            ColorMode::Luma => Array2::from_shape_vec((height, width), pixels.to_luma8().into_raw())
                .map(PixelGrid::Single)
                .map_err(|e| AnalysisError::ShapeError(e.to_string())),
            ColorMode::LumaAlpha => interleaved(pixels.to_luma_alpha8().into_raw(), height, width, 2),
            ColorMode::Rgb | ColorMode::Other(_) => {
                interleaved(pixels.to_rgb8().into_raw(), height, width, 3)
            }
            ColorMode::Rgba => interleaved(pixels.to_rgba8().into_raw(), height, width, 4),
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            PixelGrid::Single(grid) => grid.shape(),
            PixelGrid::Multi(grid) => grid.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Number of channels; 1 for a 2-D grid
    pub fn channels(&self) -> usize {
        match self {
            PixelGrid::Single(_) => 1,
            PixelGrid::Multi(grid) => grid.len_of(Axis(2)),
        }
    }

    /// Total number of samples across all channels
    pub fn len(&self) -> usize {
        match self {
            PixelGrid::Single(grid) => grid.len(),
            PixelGrid::Multi(grid) => grid.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `(height, width)` plane of one channel
    pub fn channel(&self, index: usize) -> Option<ArrayView2<'_, u8>> {
        match self {
            PixelGrid::Single(grid) => (index == 0).then(|| grid.view()),
            PixelGrid::Multi(grid) => {
                (index < grid.len_of(Axis(2))).then(|| grid.index_axis(Axis(2), index))
            }
        }
    }

    /// All samples as a dynamically-dimensioned view
    pub fn view(&self) -> ArrayViewD<'_, u8> {
        match self {
            PixelGrid::Single(grid) => grid.view().into_dyn(),
            PixelGrid::Multi(grid) => grid.view().into_dyn(),
        }
    }
}

impl From<Array2<u8>> for PixelGrid {
    fn from(grid: Array2<u8>) -> Self {
        PixelGrid::Single(grid)
    }
}

impl From<Array3<u8>> for PixelGrid {
    fn from(grid: Array3<u8>) -> Self {
        PixelGrid::Multi(grid)
    }
}

fn interleaved(data: Vec<u8>, height: usize, width: usize, channels: usize) -> Result<PixelGrid> {
    Array3::from_shape_vec((height, width, channels), data)
        .map(PixelGrid::Multi)
        .map_err(|e| AnalysisError::ShapeError(e.to_string()))
}

/// Converts an image into a grid; no image gives no grid.
pub fn to_grid(image: Option<&DecodedImage>) -> Option<PixelGrid> {
    let image = image?;
    match PixelGrid::from_image(image) {
        Ok(grid) => Some(grid),
        Err(e) => {
            error!("Failed to build pixel grid: {}", e);
            None
        }
    }
}
