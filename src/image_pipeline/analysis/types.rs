//! Analysis configuration and report types

use crate::image_pipeline::analysis::timing::PipelineTimings;
use crate::image_pipeline::loader::ColorMode;
use crate::image_pipeline::metadata::ImageInfo;
use crate::image_pipeline::stats::{ChannelStats, IntensityStats};

/// Configuration for an intensity analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Whether to reject images with a zero dimension
    pub validate_dimensions: bool,
    /// Largest accepted width or height; `None` accepts any size
    pub max_dimension: Option<u32>,
    /// Whether to compute per-channel statistics in addition to global ones
    pub per_channel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: None,
            per_channel: true,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
    per_channel: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn per_channel(mut self, enable: bool) -> Self {
        self.per_channel = Some(enable);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            per_channel: self.per_channel.unwrap_or(default.per_channel),
        }
    }
}

/// Everything one analysis run produced
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Color mode of the file before RGB normalization
    pub source_mode: ColorMode,
    /// Metadata of the normalized image
    pub info: ImageInfo,
    pub global: IntensityStats,
    /// Absent when per-channel statistics were disabled
    pub channels: Option<ChannelStats>,
    pub timings: PipelineTimings,
}
