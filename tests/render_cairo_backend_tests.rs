#![cfg(feature = "cairo-backend")]

use barchart_rs::ChartError;
use barchart_rs::api::BarChartEngine;
use barchart_rs::core::{ChartOptions, DataPoint, Viewport};
use barchart_rs::interaction::tooltip::RecordingTooltipSink;
use barchart_rs::render::{CairoRenderer, Color};

fn sample_options() -> ChartOptions {
    ChartOptions {
        viewport: Viewport::new(600, 400),
        padding: 50.0,
        bar_color: Color::rgb(0.2, 0.6, 0.86),
        axis_color: Color::rgb(0.02, 0.42, 0.79),
        label_color: Color::rgb(0.4, 0.57, 0.74),
        dpr: 1.0,
    }
}

#[test]
fn cairo_renderer_executes_frame_and_counts_primitives() {
    let renderer = CairoRenderer::new(600, 400).expect("cairo renderer");
    let mut engine = BarChartEngine::new(renderer, RecordingTooltipSink::default(), sample_options())
        .expect("engine init");
    engine.set_data(vec![
        DataPoint::new("January", 30.0),
        DataPoint::new("February", 50.0),
        DataPoint::new("March", 40.0),
    ]);

    engine.draw().expect("draw");

    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 2);
    assert_eq!(stats.rects_drawn, 3);
    assert_eq!(stats.texts_drawn, 3);
}

#[test]
fn cairo_renderer_rejects_non_positive_size() {
    assert!(matches!(
        CairoRenderer::new(0, 400),
        Err(ChartError::InvalidData(_))
    ));
    assert!(matches!(
        CairoRenderer::new(600, -1),
        Err(ChartError::InvalidData(_))
    ));
}
