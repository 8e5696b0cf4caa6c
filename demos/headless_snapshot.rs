//! Headless walkthrough: draw with the null renderer, simulate a pointer
//! move, and print the versioned snapshot contract.

use barchart_rs::api::BarChartEngine;
use barchart_rs::core::{ChartOptions, DataPoint, Viewport};
use barchart_rs::interaction::SurfaceBounds;
use barchart_rs::interaction::tooltip::RecordingTooltipSink;
use barchart_rs::render::{Color, NullRenderer};

fn main() -> barchart_rs::ChartResult<()> {
    let _ = barchart_rs::telemetry::init_default_tracing();

    let options = ChartOptions {
        viewport: Viewport::new(600, 400),
        padding: 50.0,
        bar_color: Color::from_hex_str("#3498db")?,
        axis_color: Color::from_hex_str("#046ac9")?,
        label_color: Color::from_hex_str("#6691bd")?,
        dpr: 1.0,
    };

    let mut engine = BarChartEngine::new(
        NullRenderer::default(),
        RecordingTooltipSink::default(),
        options,
    )?;
    engine.set_metadata("title", "monthly sample");
    engine.set_data(vec![
        DataPoint::new("January", 30.0),
        DataPoint::new("February", 50.0),
        DataPoint::new("March", 40.0),
        DataPoint::new("April", 60.0),
        DataPoint::new("May", 70.0),
    ]);
    engine.draw()?;

    engine.pointer_move(300.0, 250.0, SurfaceBounds::new(0.0, 0.0));
    if let Some(bar) = engine.hovered_bar() {
        eprintln!("hovering {}: {}", bar.label, bar.value);
    }

    println!("{}", engine.snapshot_json_contract_v1_pretty()?);
    Ok(())
}
