use serde::{Deserialize, Serialize};

use crate::error::{HistogramError, HistogramResult};

use super::HistogramSnapshot;

pub const HISTOGRAM_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope around [`HistogramSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: HistogramSnapshot,
}

impl HistogramSnapshot {
    pub fn to_json_pretty(&self) -> HistogramResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            HistogramError::InvalidData(format!("failed to serialize snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> HistogramResult<String> {
        let payload = HistogramSnapshotJsonContractV1 {
            schema_version: HISTOGRAM_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            HistogramError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both the bare snapshot and the v1 envelope.
    pub fn from_json_compat_str(input: &str) -> HistogramResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<HistogramSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: HistogramSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            HistogramError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != HISTOGRAM_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(HistogramError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
