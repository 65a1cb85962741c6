//! Analysis orchestration module
//!
//! Runs decode, RGB normalization, validation, grid construction and
//! statistics as one timed pipeline over an in-memory or on-disk image.

mod pipeline;
mod timing;
mod types;


pub use pipeline::IntensityStatsPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{AnalysisConfig, AnalysisConfigBuilder, AnalysisReport};
