#[cfg(feature = "gtk4-adapter")]
fn main() {
    use gtk4 as gtk;
    use gtk4::prelude::*;

    use barchart_rs::api::BarChartEngine;
    use barchart_rs::core::{ChartOptions, DataPoint, Viewport};
    use barchart_rs::platform_gtk::{GtkBarChartAdapter, GtkLabelTooltipSink};
    use barchart_rs::render::{CairoRenderer, Color};

    let _ = barchart_rs::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.barchart.demos.hover_tooltip")
        .build();

    app.connect_activate(|app| {
        let options = ChartOptions {
            viewport: Viewport::new(600, 400),
            padding: 50.0,
            bar_color: Color::from_hex_str("#3498db").expect("bar color"),
            axis_color: Color::from_hex_str("#046ac9").expect("axis color"),
            label_color: Color::from_hex_str("#6691bd").expect("label color"),
            dpr: 1.0,
        };

        let fixed = gtk::Fixed::new();
        fixed.set_can_target(false); // the tooltip must not intercept pointer events
        let tooltip_label = gtk::Label::new(None);
        tooltip_label.add_css_class("chart-tooltip");
        fixed.put(&tooltip_label, 0.0, 0.0);
        let sink = GtkLabelTooltipSink::new(&fixed, &tooltip_label);

        let css = gtk::CssProvider::new();
        css.load_from_data(
            "label.chart-tooltip { background-color: #000; color: #fff; padding: 5px; border-radius: 4px; }",
        );
        if let Some(display) = gtk::gdk::Display::default() {
            gtk::style_context_add_provider_for_display(
                &display,
                &css,
                gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }

        let renderer = match CairoRenderer::new(600, 400) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to create renderer: {err}");
                return;
            }
        };
        let mut engine = match BarChartEngine::new(renderer, sink, options) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to initialize engine: {err}");
                return;
            }
        };
        engine.set_data(vec![
            DataPoint::new("January", 30.0),
            DataPoint::new("February", 50.0),
            DataPoint::new("March", 40.0),
            DataPoint::new("April", 60.0),
            DataPoint::new("May", 70.0),
        ]);

        let adapter = GtkBarChartAdapter::new(engine);
        adapter.drawing_area().set_content_width(600);
        adapter.drawing_area().set_content_height(400);
        let subscription = adapter.attach_hover();

        let overlay = gtk::Overlay::new();
        overlay.set_child(Some(adapter.drawing_area()));
        overlay.add_overlay(&fixed);

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("barchart-rs | hover tooltip")
            .default_width(600)
            .default_height(400)
            .build();
        window.set_child(Some(&overlay));
        window.connect_close_request(move |_| {
            // Keeps the hover subscription alive until the window closes.
            let _ = &subscription;
            gtk::glib::Propagation::Proceed
        });
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_hover_tooltip");
}
