//! Image intensity pipeline module
//!
//! Loading with RGB normalization, metadata inspection, grid conversion and
//! intensity statistics, each usable on its own or chained through
//! [`IntensityStatsPipeline`].
//!
//! The free functions take and return `Option`s: a missing image or grid
//! yields a missing result instead of an error. [`global_stats`] answers
//! `(None, None)` while [`per_channel_stats`] answers a single `None`.

pub mod common;
pub mod loader;
pub mod metadata;
pub mod grid;
pub mod stats;
pub mod analysis;

pub use common::{
    AnalysisError,
    Result,
};

pub use loader::{
    ColorMode,
    DecodedImage,
    ImageCrateReader,
    ImageReader,
    load_image,
    try_load_image,
};

pub use metadata::{
    ImageInfo,
    inspect,
};

pub use grid::{
    PixelGrid,
    to_grid,
};

pub use stats::{
    ChannelStats,
    IntensityStats,
    global_stats,
    per_channel_stats,
};

pub use analysis::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    AnalysisReport,
    IntensityStatsPipeline,
    PipelineTimings,
};
