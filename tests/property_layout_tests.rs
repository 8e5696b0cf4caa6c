use barchart_rs::api::BarChartEngine;
use barchart_rs::core::{ChartOptions, DataPoint, Viewport, layout_bars};
use barchart_rs::interaction::hit_test;
use barchart_rs::interaction::tooltip::RecordingTooltipSink;
use barchart_rs::render::{Color, NullRenderer};
use proptest::prelude::*;

fn sample_options(dpr: f64) -> ChartOptions {
    ChartOptions {
        viewport: Viewport::new(600, 400),
        padding: 50.0,
        bar_color: Color::rgb(0.2, 0.6, 0.86),
        axis_color: Color::rgb(0.02, 0.42, 0.79),
        label_color: Color::rgb(0.4, 0.57, 0.74),
        dpr,
    }
}

fn data_from(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| DataPoint::new(format!("c{index}"), *value))
        .collect()
}

proptest! {
    #[test]
    fn catalog_size_and_order_match_input(
        values in prop::collection::vec(0.0f64..10_000.0, 1..64)
    ) {
        let data = data_from(&values);
        let bars = layout_bars(&data, &sample_options(1.0));

        prop_assert_eq!(bars.len(), data.len());
        for (index, bar) in bars.iter().enumerate() {
            let expected_id = format!("bar-{index}");
            prop_assert_eq!(bar.id.as_str(), expected_id.as_str());
            prop_assert!(bar.height.is_finite());
            prop_assert!(bar.height <= 300.0 + 1e-9);
        }
        for pair in bars.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn maximum_bar_always_fills_available_height(
        values in prop::collection::vec(1.0f64..10_000.0, 1..64)
    ) {
        let data = data_from(&values);
        let bars = layout_bars(&data, &sample_options(1.0));

        let tallest = bars
            .iter()
            .map(|bar| bar.height)
            .fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((tallest - 300.0).abs() <= 1e-9);
    }

    #[test]
    fn layout_is_deterministic(
        values in prop::collection::vec(0.0f64..10_000.0, 1..64)
    ) {
        let data = data_from(&values);
        let options = sample_options(1.0);

        let first = layout_bars(&data, &options);
        let second = layout_bars(&data, &options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn center_of_every_bar_hits_that_bar(
        values in prop::collection::vec(1.0f64..1_000.0, 1..32),
        dpr in 1.0f64..3.0
    ) {
        let data = data_from(&values);
        let bars = layout_bars(&data, &sample_options(dpr));

        for (index, bar) in bars.iter().enumerate() {
            let local_x = (bar.x + bar.width / 2.0) / dpr;
            let local_y = (bar.y + bar.height / 2.0) / dpr;
            prop_assert_eq!(hit_test(&bars, local_x, local_y, dpr), Some(index));
        }
    }

    #[test]
    fn frame_build_is_deterministic_and_finite(
        values in prop::collection::vec(0.0f64..10_000.0, 1..64)
    ) {
        let mut engine = BarChartEngine::new(
            NullRenderer::default(),
            RecordingTooltipSink::default(),
            sample_options(1.0),
        ).expect("engine init");
        engine.set_data(data_from(&values));
        engine.draw().expect("draw");

        let first = engine.build_render_frame().expect("first frame");
        let second = engine.build_render_frame().expect("second frame");

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.rects.len(), values.len());
        prop_assert!(first.rects.iter().all(|rect|
            rect.x.is_finite()
            && rect.y.is_finite()
            && rect.width.is_finite()
            && rect.height.is_finite()
        ));
    }
}
