use ndarray::{ArrayView, Axis, Dimension};
use tracing::debug;

use crate::image_pipeline::grid::PixelGrid;
use crate::image_pipeline::stats::types::{ChannelStats, IntensityStats};

/// Mean and population standard deviation (no Bessel correction).
///
/// An empty view gives NaN for both.
pub fn summarize<D: Dimension>(values: ArrayView<'_, u8, D>) -> IntensityStats {
    if values.is_empty() {
        return IntensityStats::undefined();
    }

    let values = values.mapv(f64::from);
    let mean = values.mean().unwrap_or(f64::NAN);
    let std_dev = values.std(0.0);
    IntensityStats::new(mean, std_dev)
}

/// Statistics over every sample of the grid, all channels pooled.
pub fn compute_global(grid: &PixelGrid) -> IntensityStats {
    let stats = summarize(grid.view());
    debug!(samples = grid.len(), mean = stats.mean, std_dev = stats.std_dev, "Global statistics");
    stats
}

/// Statistics of each channel plane, in channel order.
///
/// A 2-D grid is a single channel.
pub fn compute_per_channel(grid: &PixelGrid) -> ChannelStats {
    match grid {
        PixelGrid::Single(plane) => std::iter::once(summarize(plane.view())).collect(),
        PixelGrid::Multi(grid) => grid
            .axis_iter(Axis(2))
            .map(summarize)
            .collect(),
    }
}

/// Global `(mean, std)` of a grid, or `(None, None)` without one.
pub fn global_stats(grid: Option<&PixelGrid>) -> (Option<f64>, Option<f64>) {
    match grid {
        Some(grid) => {
            let stats = compute_global(grid);
            (Some(stats.mean), Some(stats.std_dev))
        }
        None => (None, None),
    }
}

/// Per-channel statistics of a grid, or `None` without one.
pub fn per_channel_stats(grid: Option<&PixelGrid>) -> Option<ChannelStats> {
    grid.map(compute_per_channel)
}
