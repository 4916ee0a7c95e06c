use serde::{Deserialize, Serialize};

use crate::error::{TooltipError, TooltipResult};

use super::TooltipPass;

pub const TOOLTIP_PASS_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON envelope for handing a pass result to a web host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPassJsonContractV1 {
    pub schema_version: u32,
    pub pass: TooltipPass,
}

impl TooltipPass {
    pub fn to_json_contract_v1_pretty(&self) -> TooltipResult<String> {
        let payload = TooltipPassJsonContractV1 {
            schema_version: TOOLTIP_PASS_JSON_SCHEMA_V1,
            pass: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TooltipError::InvalidData(format!("failed to serialize tooltip pass contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> TooltipResult<Self> {
        if let Ok(pass) = serde_json::from_str::<TooltipPass>(input) {
            return Ok(pass);
        }
        let payload: TooltipPassJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TooltipError::InvalidData(format!("failed to parse tooltip pass json payload: {e}"))
        })?;
        if payload.schema_version != TOOLTIP_PASS_JSON_SCHEMA_V1 {
            return Err(TooltipError::InvalidData(format!(
                "unsupported tooltip pass schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.pass)
    }
}
