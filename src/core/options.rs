use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Complete styling/configuration for one chart instance.
///
/// Every field is required; the core performs no partial defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub viewport: Viewport,
    /// Margin reserved for axes and labels on all sides.
    pub padding: f64,
    pub bar_color: Color,
    pub axis_color: Color,
    pub label_color: Color,
    /// Device pixel ratio used to translate pointer coordinates back into
    /// drawing-surface units.
    pub dpr: f64,
}

impl ChartOptions {
    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.viewport.width)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        f64::from(self.viewport.height)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.padding.is_finite() {
            return Err(ChartError::InvalidData("padding must be finite".to_owned()));
        }
        if !self.dpr.is_finite() || self.dpr <= 0.0 {
            return Err(ChartError::InvalidData(
                "device pixel ratio must be finite and > 0".to_owned(),
            ));
        }
        self.bar_color.validate()?;
        self.axis_color.validate()?;
        self.label_color.validate()
    }
}
