use std::path::Path;

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    analysis::{AnalysisConfig, AnalysisReport, PipelineTimings},
    common::error::{AnalysisError, Result},
    grid::PixelGrid,
    loader::{ImageCrateReader, ImageReader},
    metadata::ImageInfo,
    stats::{compute_global, compute_per_channel},
};

pub struct IntensityStatsPipeline<R: ImageReader> {
    reader: R,
    config: AnalysisConfig,
}

impl IntensityStatsPipeline<ImageCrateReader> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            config,
        }
    }
}

impl<R: ImageReader> IntensityStatsPipeline<R> {
    pub fn with_custom(reader: R, config: AnalysisConfig) -> Self {
        Self { reader, config }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(AnalysisError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes `input_data` and computes its intensity statistics.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn analyze(&self, input_data: &[u8]) -> Result<AnalysisReport> {
        let mut timings = PipelineTimings::new();
        info!("Starting intensity analysis");

        let decoded = {
            let _span = tracing::info_span!("decode_image").entered();
            timings.record("decode_image", || self.reader.read_image(input_data))?
        };
        let source_mode = decoded.mode();

        let image = timings.record("normalize_rgb", || decoded.into_rgb());
        let info = ImageInfo::from_image(&image);

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = info.width,
                height = info.height
            ).entered();
            self.validate_dimensions(info.width, info.height)?;
        }

        let grid = {
            let _span = tracing::info_span!("build_grid").entered();
            timings.record("build_grid", || PixelGrid::from_image(&image))?
        };

        let global = {
            let _span = tracing::info_span!("global_stats").entered();
            timings.record("global_stats", || compute_global(&grid))
        };

        let channels = if self.config.per_channel {
            let _span = tracing::info_span!("per_channel_stats").entered();
            Some(timings.record("per_channel_stats", || compute_per_channel(&grid)))
        } else {
            None
        };

        info!(
            width = info.width,
            height = info.height,
            source_mode = %source_mode,
            mean = global.mean,
            std_dev = global.std_dev,
            "Analysis complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );

        Ok(AnalysisReport {
            source_mode,
            info,
            global,
            channels,
            timings,
        })
    }

    #[instrument(skip(self, input_path))]
    pub fn analyze_file<P: AsRef<Path>>(&self, input_path: P) -> Result<AnalysisReport> {
        let input_path = input_path.as_ref();
        info!(input = %input_path.display(), "Analyzing file");

        let mut timings = PipelineTimings::new();
        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            timings.record("read_input_file", || std::fs::read(input_path)).map_err(|e| {
                AnalysisError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut report = self.analyze(&input_data)?;
        for step in report.timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }
        report.timings = timings;

        Ok(report)
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}
