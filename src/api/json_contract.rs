use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::tooltip::TooltipSink;
use crate::render::Renderer;

use super::{BarChartEngine, EngineSnapshot};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer, S: TooltipSink> BarChartEngine<R, S> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
