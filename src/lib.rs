//! Descriptive intensity statistics for raster images.
//!
//! The [`image_pipeline`] module loads an image, normalizes it to RGB,
//! exposes it as a dense pixel grid and computes the mean and population
//! standard deviation of its intensities, globally and per channel.

pub mod image_pipeline;
pub mod logger;
