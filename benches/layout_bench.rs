use barchart_rs::core::{ChartOptions, DataPoint, Viewport, layout_bars};
use barchart_rs::interaction::hit_test;
use barchart_rs::render::Color;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_options() -> ChartOptions {
    ChartOptions {
        viewport: Viewport::new(1920, 1080),
        padding: 50.0,
        bar_color: Color::rgb(0.2, 0.6, 0.86),
        axis_color: Color::rgb(0.02, 0.42, 0.79),
        label_color: Color::rgb(0.4, 0.57, 0.74),
        dpr: 2.0,
    }
}

fn synthetic_data(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| DataPoint::new(format!("c{i}"), 1.0 + (i % 97) as f64))
        .collect()
}

fn bench_layout_1k(c: &mut Criterion) {
    let options = bench_options();
    let data = synthetic_data(1_000);

    c.bench_function("bar_layout_1k", |b| {
        b.iter(|| {
            let _ = layout_bars(black_box(&data), black_box(&options));
        })
    });
}

fn bench_hit_test_scan_1k(c: &mut Criterion) {
    let options = bench_options();
    let data = synthetic_data(1_000);
    let bars = layout_bars(&data, &options);

    c.bench_function("hover_hit_test_scan_1k", |b| {
        b.iter(|| {
            let _ = hit_test(black_box(&bars), black_box(960.0), black_box(400.0), 2.0);
        })
    });
}

criterion_group!(benches, bench_layout_1k, bench_hit_test_scan_1k);
criterion_main!(benches);
