//! Pointer hover tracking and tooltip dispatch.

pub mod tooltip;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Bar;

/// On-screen origin of the drawing surface, in viewport units.
///
/// Pointer events arrive in viewport coordinates; subtracting this origin
/// yields surface-local logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
}

impl SurfaceBounds {
    #[must_use]
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Hover state driven by pointer-move events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverState {
    /// No bar under the pointer.
    #[default]
    Idle,
    /// The pointer is over exactly one bar's rectangle.
    Hovering { bar_index: usize },
}

impl HoverState {
    #[must_use]
    pub fn is_hovering(self) -> bool {
        matches!(self, Self::Hovering { .. })
    }
}

/// Scans the catalog for bars containing the local pointer position.
///
/// The scan never short-circuits; when rectangles overlap the last match in
/// iteration order wins. Bar geometry is divided by `dpr` to compare against
/// logical coordinates. The horizontal interval is half-open (`[left, right)`)
/// and the vertical interval is open (`(top, bottom)`), so boundary pixels
/// behave identically across backends.
#[must_use]
pub fn hit_test(bars: &[Bar], local_x: f64, local_y: f64, dpr: f64) -> Option<usize> {
    let mut matches: SmallVec<[usize; 2]> = SmallVec::new();
    for (index, bar) in bars.iter().enumerate() {
        let left = bar.x / dpr;
        let right = (bar.x + bar.width) / dpr;
        let top = bar.y / dpr;
        let bottom = (bar.y + bar.height) / dpr;
        if local_x >= left && local_x < right && local_y > top && local_y < bottom {
            matches.push(index);
        }
    }
    matches.last().copied()
}

/// Two-state machine: `Idle` or `Hovering` over one bar.
///
/// Every pointer-move event re-runs the full catalog scan; there is no
/// debouncing or hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverTracker {
    state: HoverState,
}

impl HoverTracker {
    #[must_use]
    pub fn state(self) -> HoverState {
        self.state
    }

    /// Handles one pointer-move event in surface-local logical coordinates.
    pub fn on_pointer_move(
        &mut self,
        bars: &[Bar],
        local_x: f64,
        local_y: f64,
        dpr: f64,
    ) -> HoverState {
        self.state = match hit_test(bars, local_x, local_y, dpr) {
            Some(bar_index) => HoverState::Hovering { bar_index },
            None => HoverState::Idle,
        };
        self.state
    }

    pub fn on_pointer_leave(&mut self) -> HoverState {
        self.state = HoverState::Idle;
        self.state
    }
}
