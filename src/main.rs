use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use intensity_stats_rs::image_pipeline::{AnalysisConfig, AnalysisReport, IntensityStatsPipeline};
use intensity_stats_rs::logger;

use tracing::info;

/// Mean and standard deviation of an image's pixel intensities
#[derive(Parser, Debug)]
#[command(name = "intensity_stats", version, about)]
struct Cli {
    /// Image file to analyze
    path: PathBuf,

    /// Reject images wider or taller than this many pixels
    #[arg(long)]
    max_dimension: Option<u32>,

    /// Only report the statistics pooled over all channels
    #[arg(long)]
    no_per_channel: bool,

    /// Print how long each pipeline step took
    #[arg(long)]
    timings: bool,
}

fn print_report(report: &AnalysisReport) {
    let (width, height) = report.info.dimensions();
    println!("Channels: {}", report.info.channel_count);
    println!("Dimensions: {}x{}", width, height);
    println!("Source mode: {}", report.source_mode);
    println!(
        "Global: mean={:.4}, std={:.4}",
        report.global.mean, report.global.std_dev
    );

    if let Some(channels) = &report.channels {
        for (label, stats) in channels.iter() {
            println!("{}: mean={:.4}, std={:.4}", label, stats.mean, stats.std_dev);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    info!("Starting intensity_stats...");

    let config = AnalysisConfig::builder()
        .max_dimension(cli.max_dimension)
        .per_channel(!cli.no_per_channel)
        .build();
    let pipeline = IntensityStatsPipeline::new(config);

    let report = pipeline
        .analyze_file(&cli.path)
        .with_context(|| format!("analysis of {} failed", cli.path.display()))?;

    print_report(&report);
    if cli.timings {
        println!("\n{}", report.timings);
    }

    Ok(())
}
