use serde::{Deserialize, Serialize};

use super::JiraEventKind;
use crate::types::{
    changes::JiraChangelog, comments::JiraComment, common::JiraUser, issues::JiraIssue,
};

/// Jira webhook event, fully parsed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct JiraWebhookEvent {
    /// Event kind.
    #[serde(rename = "webhookEvent")]
    pub webhook_event: JiraEventKind,
    /// Timestamp (ms).
    pub timestamp: Option<i64>,
    /// Issue.
    pub issue: JiraIssue,
    /// Acting user.
    pub user: Option<JiraUser>,
    /// Comment.
    pub comment: Option<JiraComment>,
    /// Changelog.
    pub changelog: Option<JiraChangelog>,
}
