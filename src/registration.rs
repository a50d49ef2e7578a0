use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// The document printed by an application-registration command. Only
/// `appId` is looked at; every other key is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Registration {
    #[serde(rename = "appId")]
    app_id: Value,
}

impl Registration {
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let json = serde_json::from_slice::<Value>(raw)
            .map_err(|e| anyhow!("Invalid input JSON: {}", e))?;

        // Structs also deserialize from sequences, so the mapping is checked first.
        let descriptor = serde_json::from_value::<Map<String, Value>>(json)
            .map_err(|e| anyhow!("Invalid registration descriptor: {}", e))?;

        Self::deserialize(Value::Object(descriptor))
            .map_err(|e| anyhow!("Invalid registration descriptor: {}", e))
    }

    /// Strings print bare, anything else prints as compact JSON exactly as
    /// it was written: numbers keep their digits, and `null`, `true` and
    /// `false` stay in JSON spelling.
    pub fn app_id_text(&self) -> String {
        match &self.app_id {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        }
    }
}
