use serde::{Deserialize, Serialize};

use crate::types::common::JiraUser;

/// Jira Issue comment.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct JiraComment {
    /// ID.
    pub id: Option<String>,
    /// Body.
    pub body: Option<String>,
    /// Author.
    pub author: Option<JiraUser>,
    /// Creation timestamp.
    pub created: Option<String>,
    /// Last update timestamp.
    pub updated: Option<String>,
}

impl JiraComment {
    /// Was the comment edited after its creation?
    pub fn is_edited(&self) -> bool {
        self.created != self.updated
    }
}
