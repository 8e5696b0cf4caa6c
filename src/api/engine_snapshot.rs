use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Bar, ChartOptions, DataPoint};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverState;
use crate::interaction::tooltip::TooltipSink;
use crate::render::Renderer;

use super::BarChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub options: ChartOptions,
    pub data: Vec<DataPoint>,
    pub bars: Vec<Bar>,
    pub hover: HoverState,
    pub metadata: IndexMap<String, String>,
}

impl<R: Renderer, S: TooltipSink> BarChartEngine<R, S> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            options: self.options,
            data: self.data.clone(),
            bars: self.bars.clone(),
            hover: self.hover.state(),
            metadata: self.metadata.clone(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
