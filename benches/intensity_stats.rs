use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use intensity_stats_rs::image_pipeline::{
    AnalysisConfig, DecodedImage, IntensityStatsPipeline, PixelGrid, global_stats, per_channel_stats,
};
use std::hint::black_box;
use std::io::Cursor;

fn generate_mock_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([((x + y) % 256) as u8, (x % 256) as u8, (y % 256) as u8])
    }))
}

fn benchmark_statistics_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let image = DecodedImage::new(generate_mock_image(width, height));
        let grid = PixelGrid::from_image(&image).unwrap();

        group.bench_with_input(BenchmarkId::new("global", label), &grid, |b, grid| {
            b.iter(|| global_stats(Some(black_box(grid))));
        });
        group.bench_with_input(BenchmarkId::new("per_channel", label), &grid, |b, grid| {
            b.iter(|| per_channel_stats(Some(black_box(grid))));
        });
    }

    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut bytes = Cursor::new(Vec::new());
    generate_mock_image(500, 500)
        .write_to(&mut bytes, ImageFormat::Png)
        .unwrap();
    let data = bytes.into_inner();

    let pipeline = IntensityStatsPipeline::new(AnalysisConfig::default());
    c.bench_function("pipeline_png_500x500", |b| {
        b.iter(|| {
            let _ = pipeline.analyze(black_box(&data));
        });
    });
}

criterion_group!(benches, benchmark_statistics_sizes, benchmark_full_pipeline);
criterion_main!(benches);
