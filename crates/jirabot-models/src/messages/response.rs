use serde::{Deserialize, Serialize};

use super::ChatMessage;

/// Error body returned to the chat integration.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct HookError {
    /// Always false.
    pub success: bool,
    /// Error message, followed by the serialized payload.
    pub message: String,
}

/// Hook response.
///
/// Ignored events produce no response at all.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum HookResponse {
    /// Message to post.
    Content {
        /// Message.
        content: ChatMessage,
    },
    /// Processing failure.
    Error {
        /// Error.
        error: HookError,
    },
    /// Event received, nothing to post.
    Acknowledged {},
}

impl HookResponse {
    /// Creates an error response.
    pub fn error<T: Into<String>>(message: T) -> Self {
        Self::Error {
            error: HookError {
                success: false,
                message: message.into(),
            },
        }
    }
}
