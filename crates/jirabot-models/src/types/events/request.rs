use serde::{Deserialize, Serialize};

/// Incoming webhook request, as handed over by the chat integration.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct IncomingRequest {
    /// Raw Jira payload.
    #[serde(default)]
    pub content: serde_json::Value,
}
