use serde::{Deserialize, Serialize};

/// Jira avatar URLs, by size.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct JiraAvatarUrls {
    /// 16x16.
    #[serde(rename = "16x16")]
    pub xsmall: Option<String>,
    /// 24x24.
    #[serde(rename = "24x24")]
    pub small: Option<String>,
    /// 32x32.
    #[serde(rename = "32x32")]
    pub medium: Option<String>,
    /// 48x48.
    #[serde(rename = "48x48")]
    pub large: Option<String>,
}
