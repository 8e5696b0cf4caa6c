use serde::{Deserialize, Serialize};

use super::SurfaceBounds;
use crate::core::Bar;

/// Vertical offset between a bar's top edge and the tooltip anchor.
pub const TOOLTIP_OFFSET_Y_PX: f64 = 10.0;

/// Anchor position for the tooltip, in viewport units.
///
/// `x` is the hovered bar's horizontal center and `y` sits above its top
/// edge. Sinks center themselves on `x` and keep their bottom edge at `y`,
/// so the element's own width never needs to be known in advance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub x: f64,
    pub y: f64,
}

/// Receives tooltip updates from the engine.
///
/// `show` fires on every pointer-move event while a bar is hovered and
/// `hide` on every event without a match; implementations must tolerate
/// repeated identical calls.
pub trait TooltipSink {
    fn show(&mut self, text: &str, placement: TooltipPlacement);
    fn hide(&mut self);
}

/// Tooltip text for one bar: `"<label>: <value>"`.
#[must_use]
pub fn tooltip_text(bar: &Bar) -> String {
    format!("{}: {}", bar.label, bar.value)
}

/// Anchor for one bar's tooltip: horizontally centered on the bar, offset
/// above its top edge, translated into viewport units.
#[must_use]
pub fn tooltip_placement(bar: &Bar, bounds: SurfaceBounds, dpr: f64) -> TooltipPlacement {
    TooltipPlacement {
        x: bounds.left + (bar.x + bar.width / 2.0) / dpr,
        y: bounds.top + bar.y / dpr - TOOLTIP_OFFSET_Y_PX,
    }
}

/// Sink used by tests and headless engine usage.
///
/// Records visibility plus the last shown text and placement so assertions
/// can observe tooltip traffic without a real overlay element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordingTooltipSink {
    pub visible: bool,
    pub last_text: Option<String>,
    pub last_placement: Option<TooltipPlacement>,
    pub show_calls: usize,
    pub hide_calls: usize,
}

impl TooltipSink for RecordingTooltipSink {
    fn show(&mut self, text: &str, placement: TooltipPlacement) {
        self.visible = true;
        self.last_text = Some(text.to_owned());
        self.last_placement = Some(placement);
        self.show_calls += 1;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.hide_calls += 1;
    }
}
