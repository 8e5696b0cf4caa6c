mod engine;
mod engine_snapshot;
mod frame_builder;
mod json_contract;

pub use engine::BarChartEngine;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
