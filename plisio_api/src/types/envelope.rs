use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{"status": ..., "data": ...}` wrapper every Plisio response uses.
///
/// Endpoint methods return the raw [`Value`]; callers that want typed access
/// to `data` can lift it with [`Envelope::from_value`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub status: String,
    pub data: T,
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
