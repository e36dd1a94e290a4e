use serde::{Deserialize, Serialize};

use super::JiraIssueFields;

const REST_PATH_MARKER: &str = "/rest/";

/// Jira Issue.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct JiraIssue {
    /// ID.
    pub id: Option<String>,
    /// REST API link to the issue.
    #[serde(rename = "self")]
    pub self_url: String,
    /// Key.
    pub key: String,
    /// Fields.
    pub fields: JiraIssueFields,
}

impl JiraIssue {
    /// Jira instance root URL, derived from the REST API link.
    pub fn base_url(&self) -> &str {
        match self.self_url.find(REST_PATH_MARKER) {
            Some(idx) => &self.self_url[..idx],
            None => &self.self_url,
        }
    }

    /// Browse URL, for humans.
    pub fn browse_url(&self) -> String {
        format!("{}/browse/{}", self.base_url(), self.key)
    }
}
