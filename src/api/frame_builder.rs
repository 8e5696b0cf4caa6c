use crate::core::{bar_slot_width, label_font_size};
use crate::error::ChartResult;
use crate::interaction::tooltip::TooltipSink;
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::BarChartEngine;

/// Stroke width of the two axis segments.
const AXIS_STROKE_WIDTH_PX: f64 = 2.0;

/// Horizontal correction so label anchors center under the drawn bar rather
/// than the full slot (half of the inter-bar gap).
const LABEL_CENTER_OFFSET_PX: f64 = 2.5;

/// Gap between the axis line and the label text.
const LABEL_OFFSET_Y_PX: f64 = 5.0;

impl<R: Renderer, S: TooltipSink> BarChartEngine<R, S> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// The two axis segments always come first, including for an empty
    /// catalog, followed by one rectangle per bar and one centered label per
    /// non-empty bar label. Renderers clear the full viewport before
    /// executing the frame, so the result is a complete repaint.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let options = &self.options;
        let width = options.width();
        let height = options.height();
        let padding = options.padding;

        let mut frame = RenderFrame::new(options.viewport)
            .with_line(LinePrimitive::new(
                padding,
                height - padding,
                width - padding,
                height - padding,
                AXIS_STROKE_WIDTH_PX,
                options.axis_color,
            ))
            .with_line(LinePrimitive::new(
                padding,
                padding,
                padding,
                height - padding,
                AXIS_STROKE_WIDTH_PX,
                options.axis_color,
            ));

        if !self.bars.is_empty() {
            let slot_width = bar_slot_width(options, self.bars.len());
            let font_size = label_font_size(slot_width);
            for bar in &self.bars {
                frame = frame.with_rect(RectPrimitive::new(
                    bar.x,
                    bar.y,
                    bar.width,
                    bar.height,
                    options.bar_color,
                ));
                if !bar.label.is_empty() {
                    frame = frame.with_text(TextPrimitive::new(
                        bar.label.clone(),
                        bar.x + slot_width / 2.0 - LABEL_CENTER_OFFSET_PX,
                        height - padding + font_size + LABEL_OFFSET_Y_PX,
                        font_size,
                        options.label_color,
                        TextHAlign::Center,
                    ));
                }
            }
        }

        frame.validate()?;
        Ok(frame)
    }
}
