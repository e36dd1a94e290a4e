use serde::{Deserialize, Serialize};

use super::JiraAvatarUrls;

/// Jira User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    /// Username (Jira Server).
    pub name: Option<String>,
    /// User key.
    pub key: Option<String>,
    /// Account ID (Jira Cloud).
    pub account_id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub display_name: String,
    /// Email address.
    pub email_address: Option<String>,
    /// Avatar URLs.
    pub avatar_urls: Option<JiraAvatarUrls>,
}

impl JiraUser {
    /// Stable identifier: username, or account ID when there is none.
    pub fn identifier(&self) -> Option<&str> {
        self.name.as_deref().or(self.account_id.as_deref())
    }

    /// Small avatar URL.
    pub fn small_avatar_url(&self) -> Option<&str> {
        self.avatar_urls.as_ref().and_then(|a| a.small.as_deref())
    }
}
