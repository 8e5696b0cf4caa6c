use ordered_float::OrderedFloat;

use crate::core::options::ChartOptions;
use crate::core::types::{Bar, DataPoint};

/// Fixed gap between adjacent bars, in backing-store units.
pub const BAR_GAP_PX: f64 = 5.0;

/// Cap applied to the per-pass label font size.
pub const MAX_LABEL_FONT_SIZE_PX: f64 = 28.0;

/// Largest value in the dataset, or `0.0` for an empty dataset.
#[must_use]
pub fn max_value(data: &[DataPoint]) -> f64 {
    data.iter()
        .map(|point| OrderedFloat(point.value))
        .max()
        .map_or(0.0, OrderedFloat::into_inner)
}

/// Horizontal slot reserved for one bar, gap included.
///
/// `count` must be non-zero; callers guard the empty dataset before any slot
/// math runs.
#[must_use]
pub fn bar_slot_width(options: &ChartOptions, count: usize) -> f64 {
    (options.width() - 2.0 * options.padding) / count as f64
}

/// Label font size for one pass: a third of the slot width, capped so charts
/// with few wide bars do not produce oversized text.
#[must_use]
pub fn label_font_size(slot_width: f64) -> f64 {
    (slot_width / 3.0).min(MAX_LABEL_FONT_SIZE_PX)
}

/// Computes the bar catalog for one draw pass.
///
/// One `Bar` per data point, in input order. The recorded width is the slot
/// width minus [`BAR_GAP_PX`]. Heights are normalized against the dataset
/// maximum, computed once per pass; a zero maximum pins every height to
/// `0.0` instead of dividing by zero, and an empty dataset yields an empty
/// catalog without touching the slot math.
#[must_use]
pub fn layout_bars(data: &[DataPoint], options: &ChartOptions) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }

    let height = options.height();
    let padding = options.padding;
    let slot_width = bar_slot_width(options, data.len());
    let max = max_value(data);
    let drawable_height = height - 2.0 * padding;

    data.iter()
        .enumerate()
        .map(|(index, point)| {
            let bar_height = if max == 0.0 {
                0.0
            } else {
                (point.value / max) * drawable_height
            };
            let x = padding + index as f64 * slot_width;
            let y = height - padding - bar_height;
            Bar {
                id: format!("bar-{index}"),
                x,
                y,
                width: slot_width - BAR_GAP_PX,
                height: bar_height,
                label: point.label.clone(),
                value: point.value,
            }
        })
        .collect()
}
