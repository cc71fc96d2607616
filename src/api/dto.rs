use serde::Deserialize;

/// Error body the appointments API sends with a rejected creation.
#[derive(Debug, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub response: Option<serde_json::Value>,
}

impl ErrorPayload {
    pub fn message(&self) -> Option<String> {
        self.response
            .as_ref()
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}
