use serde::{Deserialize, Serialize};

use crate::types::common::{JiraAvatarUrls, JiraUser};

/// Jira Issue priority.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct JiraPriority {
    /// Name, sometimes with an ordinal prefix (e.g. `1. High`).
    pub name: String,
}

/// Jira Issue type.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueType {
    /// Name.
    pub name: Option<String>,
    /// Icon URL.
    pub icon_url: String,
}

/// Jira Project.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JiraProject {
    /// Key.
    pub key: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Avatar URLs.
    pub avatar_urls: Option<JiraAvatarUrls>,
}

impl JiraProject {
    /// Large avatar URL.
    pub fn large_avatar_url(&self) -> Option<&str> {
        self.avatar_urls.as_ref().and_then(|a| a.large.as_deref())
    }
}

/// Jira Issue fields.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct JiraIssueFields {
    /// Summary.
    pub summary: String,
    /// Priority.
    pub priority: JiraPriority,
    /// Assignee.
    pub assignee: Option<JiraUser>,
    /// Project.
    pub project: Option<JiraProject>,
    /// Description.
    pub description: Option<String>,
    /// Issue type.
    #[serde(rename = "issuetype")]
    pub issue_type: JiraIssueType,
    /// Creation timestamp.
    pub created: Option<String>,
}
