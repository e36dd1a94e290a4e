use serde::{Deserialize, Serialize};

use super::ChatAttachment;

/// Chat message.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ChatMessage {
    /// Icon URL (or data URI).
    pub icon_url: String,
    /// Text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Attachments.
    #[serde(default)]
    pub attachments: Vec<ChatAttachment>,
}

impl ChatMessage {
    /// Creates an empty message.
    pub fn new<T: Into<String>>(icon_url: T) -> Self {
        Self {
            icon_url: icon_url.into(),
            ..Default::default()
        }
    }

    /// Is there anything to post?
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, str::is_empty) && self.attachments.is_empty()
    }
}
