use serde::{Deserialize, Serialize};

/// Chat message attachment.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ChatAttachment {
    /// Author name.
    pub author_name: String,
    /// Author icon URL.
    pub author_icon: String,
    /// Thumbnail URL.
    pub thumb_url: String,
    /// Timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
    /// Text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
