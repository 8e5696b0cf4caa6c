use barchart_rs::ChartError;
use barchart_rs::api::BarChartEngine;
use barchart_rs::core::{ChartOptions, DataPoint, Viewport};
use barchart_rs::interaction::tooltip::RecordingTooltipSink;
use barchart_rs::interaction::{HoverState, SurfaceBounds};
use barchart_rs::render::{Color, NullRenderer};

fn sample_options() -> ChartOptions {
    ChartOptions {
        viewport: Viewport::new(600, 400),
        padding: 50.0,
        bar_color: Color::from_hex_str("#3498db").expect("bar color"),
        axis_color: Color::from_hex_str("#046ac9").expect("axis color"),
        label_color: Color::from_hex_str("#6691bd").expect("label color"),
        dpr: 1.0,
    }
}

#[test]
fn engine_smoke_flow() {
    let mut engine = BarChartEngine::new(
        NullRenderer::default(),
        RecordingTooltipSink::default(),
        sample_options(),
    )
    .expect("engine init");

    engine.set_metadata("title", "monthly sample");
    engine.set_data(vec![
        DataPoint::new("January", 30.0),
        DataPoint::new("February", 50.0),
        DataPoint::new("March", 40.0),
        DataPoint::new("April", 60.0),
        DataPoint::new("May", 70.0),
    ]);
    assert_eq!(engine.data().len(), 5);

    engine.draw().expect("draw");
    assert_eq!(engine.bars().len(), 5);
    assert_eq!(engine.hover_state(), HoverState::Idle);

    let bar = engine.bars()[4].clone();
    let state = engine.pointer_move(
        bar.x + bar.width / 2.0,
        bar.y + bar.height / 2.0,
        SurfaceBounds::new(0.0, 0.0),
    );
    assert_eq!(state, HoverState::Hovering { bar_index: 4 });
    assert_eq!(engine.hovered_bar().expect("hovered bar").label, "May");

    assert_eq!(engine.pointer_leave(), HoverState::Idle);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.bars.len(), 5);
    assert_eq!(snapshot.hover, HoverState::Idle);
    assert_eq!(
        snapshot.metadata.get("title").map(String::as_str),
        Some("monthly sample")
    );

    let (renderer, sink) = engine.into_parts();
    assert_eq!(renderer.last_rect_count, 5);
    assert_eq!(sink.show_calls, 1);
    assert_eq!(sink.hide_calls, 1);
}

#[test]
fn engine_rejects_zero_sized_viewport() {
    let mut options = sample_options();
    options.viewport = Viewport::new(0, 400);

    let result = BarChartEngine::new(
        NullRenderer::default(),
        RecordingTooltipSink::default(),
        options,
    );

    assert!(matches!(
        result,
        Err(ChartError::InvalidViewport {
            width: 0,
            height: 400
        })
    ));
}

#[test]
fn engine_rejects_non_positive_dpr() {
    let mut options = sample_options();
    options.dpr = 0.0;

    let result = BarChartEngine::new(
        NullRenderer::default(),
        RecordingTooltipSink::default(),
        options,
    );

    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn set_data_defers_catalog_rebuild_to_next_draw() {
    let mut engine = BarChartEngine::new(
        NullRenderer::default(),
        RecordingTooltipSink::default(),
        sample_options(),
    )
    .expect("engine init");
    engine.set_data(vec![DataPoint::new("a", 1.0)]);
    engine.draw().expect("draw");
    assert_eq!(engine.bars().len(), 1);

    engine.set_data(vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)]);
    assert_eq!(engine.bars().len(), 1, "catalog unchanged until next draw");

    engine.draw().expect("redraw");
    assert_eq!(engine.bars().len(), 2);
}

#[test]
fn hex_color_parsing_accepts_short_and_long_forms() {
    let long = Color::from_hex_str("#3498db").expect("long form");
    assert!((long.red - f64::from(0x34u8) / 255.0).abs() < 1e-12);
    assert!((long.alpha - 1.0).abs() < 1e-12);

    let short = Color::from_hex_str("#fff").expect("short form");
    assert!((short.red - 1.0).abs() < 1e-12);

    let with_alpha = Color::from_hex_str("#3498db80").expect("alpha form");
    assert!((with_alpha.alpha - f64::from(0x80u8) / 255.0).abs() < 1e-12);

    assert!(Color::from_hex_str("3498db").is_err());
    assert!(Color::from_hex_str("#34zzdb").is_err());
    assert!(Color::from_hex_str("#34989").is_err());
}
