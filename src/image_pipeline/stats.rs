//! Intensity statistics module
//!
//! Mean and population standard deviation over a [`PixelGrid`], pooled across
//! all channels or per channel.
//!
//! [`PixelGrid`]: crate::image_pipeline::grid::PixelGrid

mod engine;
pub mod types;

pub use engine::{compute_global, compute_per_channel, global_stats, per_channel_stats, summarize};
pub use types::{channel_label, ChannelStats, IntensityStats};
